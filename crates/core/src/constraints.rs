// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Hard-rule eligibility checks.
//!
//! A candidate is eligible for a slot only if it passes the structural
//! overlap and leave checks and every active hard rule. The first failure
//! is returned so unfilled slots can be explained.

use crate::ledger::EmployeeLedger;
use roster_domain::{CoverageSlot, Employee, LeaveMap, Rule, RuleKind, RuleSet};
use time::Duration;

/// Why a candidate was not eligible for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The candidate already holds an overlapping slot.
    Overlap,
    /// The candidate is on leave or blacked out on the slot date.
    OnLeave,
    /// Rest before or after the slot is below the minimum.
    InsufficientRest {
        /// The shortest rest the assignment would leave, in minutes.
        rest_minutes: i64,
        /// The configured minimum, in hours.
        min_hours: u32,
    },
    /// The assignment would extend a night run past the limit.
    ConsecutiveNights {
        /// The run length including this slot.
        run: u32,
        /// The configured limit.
        max_nights: u32,
    },
    /// The assignment would exceed the weekly night limit.
    WeeklyNights {
        /// Nights in the week including this slot.
        count: u32,
        /// The configured limit.
        max_shifts: u32,
    },
    /// The assignment would extend a worked-day run past the limit.
    ConsecutiveWorkDays {
        /// The run length including this slot.
        run: u32,
        /// The configured limit.
        max_days: u32,
    },
}

impl Rejection {
    /// The rule id responsible for the rejection.
    #[must_use]
    pub const fn rule_id(&self) -> &'static str {
        match self {
            Self::Overlap => "no_overlapping_shifts",
            Self::OnLeave => "no_blackout_assignments",
            Self::InsufficientRest { .. } => "min_rest_hours_between_shifts",
            Self::ConsecutiveNights { .. } => "max_consecutive_nights",
            Self::WeeklyNights { .. } => "max_night_shifts_per_week",
            Self::ConsecutiveWorkDays { .. } => "max_consecutive_work_days",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overlap => write!(f, "already holds an overlapping shift"),
            Self::OnLeave => write!(f, "on leave"),
            Self::InsufficientRest {
                rest_minutes,
                min_hours,
            } => {
                write!(
                    f,
                    "only {rest_minutes} minutes of rest, {min_hours} hours required"
                )
            }
            Self::ConsecutiveNights { run, max_nights } => {
                write!(f, "{run} consecutive nights, at most {max_nights} allowed")
            }
            Self::WeeklyNights { count, max_shifts } => {
                write!(f, "{count} nights this week, at most {max_shifts} allowed")
            }
            Self::ConsecutiveWorkDays { run, max_days } => {
                write!(f, "{run} consecutive work days, at most {max_days} allowed")
            }
        }
    }
}

/// Checks whether `employee` may take `slot` given what they already hold.
///
/// # Errors
///
/// Returns the first `Rejection` encountered, in this order: overlap,
/// leave, then each active hard rule in configuration order.
pub fn check_eligibility(
    slot: &CoverageSlot,
    employee: &Employee,
    ledger: &EmployeeLedger,
    leave: &LeaveMap,
    rules: &RuleSet,
) -> Result<(), Rejection> {
    // Invariant: nobody holds two overlapping slots, whatever the rules say
    if ledger.overlaps(slot) {
        return Err(Rejection::Overlap);
    }
    if leave.is_on_leave(&employee.internal_id, slot.date) {
        return Err(Rejection::OnLeave);
    }

    for rule in rules.active_of_kind(RuleKind::Hard) {
        check_hard_rule(rule, slot, ledger)?;
    }

    Ok(())
}

fn check_hard_rule(
    rule: &Rule,
    slot: &CoverageSlot,
    ledger: &EmployeeLedger,
) -> Result<(), Rejection> {
    match rule {
        Rule::MinRestHoursBetweenShifts { min_hours } => {
            let minimum: Duration = Duration::hours(i64::from(*min_hours));
            let (before, after) = ledger.rest_around(slot);
            let shortest: Option<Duration> = before.into_iter().chain(after).min();
            if let Some(rest) = shortest.filter(|rest| *rest < minimum) {
                return Err(Rejection::InsufficientRest {
                    rest_minutes: rest.whole_minutes(),
                    min_hours: *min_hours,
                });
            }
        }
        Rule::MaxConsecutiveNights { max_nights } if slot.is_night() => {
            let run: u32 = ledger.night_run_through(slot.date);
            if run > *max_nights {
                return Err(Rejection::ConsecutiveNights {
                    run,
                    max_nights: *max_nights,
                });
            }
        }
        Rule::MaxNightShiftsPerWeek { max_shifts } if slot.is_night() => {
            let count: u32 = ledger.nights_in_week_of(slot.date) + 1;
            if count > *max_shifts {
                return Err(Rejection::WeeklyNights {
                    count,
                    max_shifts: *max_shifts,
                });
            }
        }
        Rule::MaxConsecutiveWorkDays { max_days } => {
            let run: u32 = ledger.work_run_through(slot.date);
            if run > *max_days {
                return Err(Rejection::ConsecutiveWorkDays {
                    run,
                    max_days: *max_days,
                });
            }
        }
        // Leave is checked above for everyone. Pins are placed by the
        // pre-pass. Day shifts skip the night limits.
        _ => {}
    }
    Ok(())
}
