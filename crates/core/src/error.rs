// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::DomainError;

/// Errors that can occur while building a roster.
///
/// Only malformed input is an error. Slots nobody can fill are reported
/// in the `AssignmentResult`, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An input failed domain validation.
    DomainViolation(DomainError),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
