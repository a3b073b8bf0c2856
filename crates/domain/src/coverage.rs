// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Coverage slot generation.
//!
//! Expands a recurring weekly coverage plan into one slot per seat per
//! matching date.
//!
//! ## Ordering
//!
//! Slots are ordered by:
//! 1. Date (ascending)
//! 2. Position of the originating rule in the input
//! 3. Seat index (ascending)
//!
//! The assignment engine scans slots in exactly this order, so the
//! ordering is part of the contract.

use crate::error::DomainError;
use crate::types::{CoverageRule, CoverageSlot};
use crate::validation::{validate_coverage_rule, validate_date_range};
use time::Date;

/// Generates the coverage slots for every date in `[range_start, range_end]`.
///
/// # Arguments
///
/// * `rules` - The recurring coverage plan
/// * `range_start` - First date to cover (inclusive)
/// * `range_end` - Last date to cover (inclusive)
///
/// # Returns
///
/// The slots in date, rule, seat order. An empty plan yields no slots.
///
/// # Errors
///
/// Returns an error if:
/// - The range is inverted
/// - Any rule fails `validate_coverage_rule`
pub fn generate_coverage_slots(
    rules: &[CoverageRule],
    range_start: Date,
    range_end: Date,
) -> Result<Vec<CoverageSlot>, DomainError> {
    validate_date_range(range_start, range_end)?;
    for rule in rules {
        validate_coverage_rule(rule)?;
    }

    if rules.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots: Vec<CoverageSlot> = Vec::new();
    let mut date: Date = range_start;

    loop {
        for rule in rules.iter().filter(|rule| rule.applies_on(date)) {
            slots.extend(
                (0..rule.required_headcount).map(|seat| CoverageSlot::from_rule(rule, date, seat)),
            );
        }

        if date >= range_end {
            break;
        }
        match date.next_day() {
            Some(next) => date = next,
            None => break,
        }
    }

    Ok(slots)
}
