// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Soft-rule scoring of eligible candidates.
//!
//! Each soft rule yields a score in `[-1, 1]`. The total is the weighted
//! linear sum over every active soft rule.

use crate::ledger::EmployeeLedger;
use roster_domain::{CoverageSlot, Employee, Rule, RuleKind, RuleSet};
use time::{Date, Weekday};

/// Per-slot facts shared by every candidate being ranked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringContext {
    /// Highest cumulative minutes among the eligible candidates.
    pub max_minutes: i64,
}

impl ScoringContext {
    /// Builds the context from the eligible candidates' ledgers.
    #[must_use]
    pub fn from_ledgers<'a, I>(ledgers: I) -> Self
    where
        I: IntoIterator<Item = &'a EmployeeLedger>,
    {
        let max_minutes: i64 = ledgers
            .into_iter()
            .map(EmployeeLedger::assigned_minutes)
            .max()
            .unwrap_or(0);
        Self { max_minutes }
    }
}

/// Total weighted score of a candidate for a slot.
#[must_use]
pub fn score_candidate(
    slot: &CoverageSlot,
    employee: &Employee,
    ledger: &EmployeeLedger,
    rules: &RuleSet,
    context: ScoringContext,
) -> f64 {
    rules
        .active_of_kind(RuleKind::Soft)
        .map(|rule| match rule {
            Rule::EmployeeShiftPreferences { weight } => {
                weight * preference_score(slot, employee)
            }
            Rule::BalanceTotalHours { weight } => weight * balance_score(ledger, context),
            Rule::AvoidSplitWeekends { weight } => weight * split_weekend_score(slot, ledger),
            _ => 0.0,
        })
        .sum()
}

/// `1` if the candidate prefers the slot's shift, else `0`.
#[must_use]
pub fn preference_score(slot: &CoverageSlot, employee: &Employee) -> f64 {
    if employee.prefers(&slot.shift_name) {
        1.0
    } else {
        0.0
    }
}

/// Share of the busiest candidate's minutes this candidate has not worked.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn balance_score(ledger: &EmployeeLedger, context: ScoringContext) -> f64 {
    if context.max_minutes <= 0 {
        return 1.0;
    }
    let gap: i64 = context.max_minutes - ledger.assigned_minutes();
    gap as f64 / context.max_minutes as f64
}

/// `-1` when a weekend slot would start a split weekend, else `0`.
///
/// Only a candidate working neither day of that weekend yet is penalised.
/// Taking a second shift on a day already worked changes nothing.
#[must_use]
pub fn split_weekend_score(slot: &CoverageSlot, ledger: &EmployeeLedger) -> f64 {
    match weekend_partner(slot.date) {
        Some(partner) if !ledger.works_on(partner) && !ledger.works_on(slot.date) => -1.0,
        _ => 0.0,
    }
}

/// The other day of the weekend a Saturday or Sunday belongs to.
fn weekend_partner(date: Date) -> Option<Date> {
    match date.weekday() {
        Weekday::Saturday => date.next_day(),
        Weekday::Sunday => date.previous_day(),
        _ => None,
    }
}
