// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod assign;
mod constraints;
mod error;
mod ledger;
mod plan;
mod result;
mod scoring;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use assign::assign_slots_to_employees;
pub use constraints::{Rejection, check_eligibility};
pub use error::CoreError;
pub use ledger::EmployeeLedger;
pub use plan::{RosterRequest, build_roster};
pub use result::{
    AssignmentResult, CandidateRejection, EmployeeWorkload, PinConflict, PinConflictReason,
    Summary, UnfilledSlot,
};
pub use scoring::{ScoringContext, score_candidate};
