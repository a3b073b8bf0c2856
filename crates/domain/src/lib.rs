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

mod coverage;
mod error;
mod rotation;
mod rules;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use coverage::generate_coverage_slots;
pub use error::DomainError;
pub use rotation::rotation_order;
pub use rules::{
    DEFAULT_MAX_CONSECUTIVE_NIGHTS, DEFAULT_MAX_CONSECUTIVE_WORK_DAYS,
    DEFAULT_MAX_NIGHT_SHIFTS_PER_WEEK, DEFAULT_MIN_REST_HOURS, DEFAULT_SOFT_WEIGHT, Rule,
    RuleConfig, RuleDefinition, RuleKind, RuleSet, rule_catalogue,
};
pub use types::{
    CoverageRule, CoverageSlot, Employee, LeaveInterval, LeaveMap, PinnedShift, weekday_index,
};
pub use validation::{validate_coverage_rule, validate_date_range, validate_leave_interval};
