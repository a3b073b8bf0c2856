// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Time};

/// Errors raised when roster inputs fail validation.
///
/// These are boundary errors only. An infeasible roster is never an error;
/// it is reported as unassigned slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The range start is after the range end.
    InvalidDateRange {
        /// First date of the requested range.
        start: Date,
        /// Last date of the requested range.
        end: Date,
    },
    /// A coverage rule asks for zero seats.
    InvalidHeadcount {
        /// The shift the rule describes.
        shift_name: String,
        /// The rejected headcount.
        headcount: u32,
    },
    /// A coverage rule names a weekday index outside `0..=6`.
    InvalidWeekday {
        /// The shift the rule describes.
        shift_name: String,
        /// The rejected weekday index.
        index: u8,
    },
    /// Shift name is empty or invalid.
    InvalidShiftName(String),
    /// Shift start and end are identical.
    InvalidShiftTimes {
        /// The shift the rule describes.
        shift_name: String,
        /// The shift start time.
        start: Time,
        /// The shift end time.
        end: Time,
    },
    /// A leave interval ends before it starts.
    InvalidLeaveInterval {
        /// The employee the interval belongs to.
        employee_id: String,
        /// First day of leave.
        start: Date,
        /// Last day of leave.
        end: Date,
    },
    /// A rule parameter or weight is not usable.
    InvalidRuleParameter {
        /// The rule identifier.
        rule_id: String,
        /// The offending parameter name.
        param: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: start {start} is after end {end}")
            }
            Self::InvalidHeadcount {
                shift_name,
                headcount,
            } => {
                write!(
                    f,
                    "Invalid headcount {headcount} for shift '{shift_name}'. Must be at least 1"
                )
            }
            Self::InvalidWeekday { shift_name, index } => {
                write!(
                    f,
                    "Invalid weekday index {index} for shift '{shift_name}'. Must be between 0 and 6"
                )
            }
            Self::InvalidShiftName(msg) => write!(f, "Invalid shift name: {msg}"),
            Self::InvalidShiftTimes {
                shift_name,
                start,
                end,
            } => {
                write!(
                    f,
                    "Invalid times for shift '{shift_name}': start {start} and end {end} must differ"
                )
            }
            Self::InvalidLeaveInterval {
                employee_id,
                start,
                end,
            } => {
                write!(
                    f,
                    "Invalid leave interval for employee '{employee_id}': {start} is after {end}"
                )
            }
            Self::InvalidRuleParameter {
                rule_id,
                param,
                reason,
            } => {
                write!(f, "Invalid parameter '{param}' for rule '{rule_id}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
