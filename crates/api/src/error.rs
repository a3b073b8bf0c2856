// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::rule_config::RuleConfigError;
use roster::CoreError;
use roster_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<RuleConfigError> for ApiError {
    fn from(err: RuleConfigError) -> Self {
        match err {
            RuleConfigError::Parameter(domain_err) => translate_domain_error(domain_err),
            other => Self::InvalidInput {
                field: String::from("rules"),
                message: other.to_string(),
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::InvalidDateRange { .. } => ApiError::DomainRuleViolation {
            rule: String::from("date_range_order"),
            message,
        },
        DomainError::InvalidHeadcount { .. } => ApiError::InvalidInput {
            field: String::from("required_headcount"),
            message,
        },
        DomainError::InvalidWeekday { .. } => ApiError::InvalidInput {
            field: String::from("days_of_week"),
            message,
        },
        DomainError::InvalidShiftName(_) => ApiError::InvalidInput {
            field: String::from("shift_name"),
            message,
        },
        DomainError::InvalidShiftTimes { .. } => ApiError::InvalidInput {
            field: String::from("end_time"),
            message,
        },
        DomainError::InvalidLeaveInterval { .. } => ApiError::DomainRuleViolation {
            rule: String::from("leave_interval_order"),
            message,
        },
        DomainError::InvalidRuleParameter { rule_id, .. } => {
            ApiError::DomainRuleViolation {
                rule: rule_id,
                message,
            }
        }
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
