// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The constraint-based assignment engine.
//!
//! A single deterministic pass over the slots with no backtracking:
//!
//! 1. Order employees with `rotation_order`.
//! 2. Seed per-employee ledgers from slots that arrive already assigned.
//! 3. Place pinned shifts, if `pinned_shifts_required` is active.
//! 4. For every open slot, scan the rotation starting just after the last
//!    winner, drop candidates who overlap, are on leave or fail a hard
//!    rule, and give the slot to the best soft-rule score. Ties go to the
//!    earliest in the scan.
//! 5. Count the result.
//!
//! The engine never reads the clock or any random source. Identical
//! inputs always yield identical results.

use crate::constraints::check_eligibility;
use crate::ledger::EmployeeLedger;
use crate::result::{
    AssignmentResult, CandidateRejection, EmployeeWorkload, PinConflict, PinConflictReason,
    Summary, UnfilledSlot,
};
use crate::scoring::{ScoringContext, score_candidate};
use roster_domain::{CoverageSlot, Employee, LeaveMap, Rule, RuleSet, rotation_order};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Outcome of ranking the pool for one slot.
#[derive(Debug)]
enum Selection {
    /// Rotation position of the winner and its score.
    Winner { position: usize, score: f64 },
    /// Nobody was eligible.
    Nobody(Vec<CandidateRejection>),
}

/// Per-run mutable state: one ledger per employee in rotation order.
struct Run<'a> {
    order: Vec<&'a Employee>,
    ledgers: Vec<EmployeeLedger>,
}

impl<'a> Run<'a> {
    /// Orders the pool, keeping one entry per internal id.
    ///
    /// A repeated id keeps only its first entry in rotation order.
    fn new(employees: &'a [Employee], rotation_offset: i64) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let order: Vec<&Employee> = rotation_order(employees, rotation_offset)
            .into_iter()
            .filter(|&employee| {
                let first: bool = seen.insert(employee.internal_id.as_str());
                if !first {
                    warn!(
                        employee_id = %employee.internal_id,
                        employee_code = %employee.employee_code,
                        "Ignoring repeated employee id"
                    );
                }
                first
            })
            .collect();
        let ledgers: Vec<EmployeeLedger> = vec![EmployeeLedger::default(); order.len()];
        Self { order, ledgers }
    }

    fn position_of(&self, employee_id: &str) -> Option<usize> {
        self.order
            .iter()
            .position(|employee| employee.internal_id == employee_id)
    }

    fn workloads(&self) -> Vec<EmployeeWorkload> {
        self.order
            .iter()
            .zip(&self.ledgers)
            .map(|(employee, ledger)| EmployeeWorkload {
                employee_id: employee.internal_id.clone(),
                employee_code: employee.employee_code.clone(),
                assigned_slots: ledger.assigned_slots(),
                assigned_minutes: ledger.assigned_minutes(),
            })
            .collect()
    }
}

/// Fills the slots from the employee pool under the configured rules.
///
/// # Arguments
///
/// * `slots` - Slots in generator order. Slots already assigned are kept.
/// * `employees` - The pool, in any order
/// * `leave` - Leave and blackout intervals
/// * `rules` - The rule configuration
/// * `rotation_offset` - Circular shift of the default employee order
///
/// # Returns
///
/// The slots with assignees filled in where possible, the summary
/// counts, the reasons each open slot stayed open, any pins that could
/// not be placed, and per-employee workload.
#[must_use]
pub fn assign_slots_to_employees(
    slots: &[CoverageSlot],
    employees: &[Employee],
    leave: &LeaveMap,
    rules: &RuleSet,
    rotation_offset: i64,
) -> AssignmentResult {
    for rule_id in rules.ignored_ids() {
        warn!(rule_id = rule_id, "Ignoring unrecognized rule");
    }

    let mut run: Run<'_> = Run::new(employees, rotation_offset);
    let mut slots: Vec<CoverageSlot> = slots.to_vec();

    seed_preassigned(&slots, &mut run);

    let pin_conflicts: Vec<PinConflict> = if rules
        .active()
        .any(|rule| matches!(rule, Rule::PinnedShiftsRequired))
    {
        place_pins(&mut slots, &mut run, leave)
    } else {
        Vec::new()
    };

    let mut unfilled: Vec<UnfilledSlot> = Vec::new();
    let mut pointer: usize = 0;

    for (slot_index, slot) in slots.iter_mut().enumerate() {
        if slot.is_assigned() {
            continue;
        }

        match select_candidate(slot, &run, leave, rules, pointer) {
            Selection::Winner { position, score } => {
                let employee: &Employee = run.order[position];
                if slot.try_assign(&employee.internal_id) {
                    run.ledgers[position].record(slot);
                    pointer = (position + 1) % run.order.len();
                    debug!(
                        date = %slot.date,
                        shift = %slot.shift_name,
                        seat = slot.seat_index,
                        employee_id = %employee.internal_id,
                        score = score,
                        "Assigned slot"
                    );
                }
            }
            Selection::Nobody(rejections) => {
                debug!(
                    date = %slot.date,
                    shift = %slot.shift_name,
                    seat = slot.seat_index,
                    candidates = rejections.len(),
                    "No eligible candidate for slot"
                );
                unfilled.push(UnfilledSlot {
                    slot_index,
                    rejections,
                });
            }
        }
    }

    let summary: Summary = Summary::from_slots(&slots);
    info!(
        slots = slots.len(),
        assigned = summary.assigned_slots,
        unassigned = summary.unassigned_slots,
        pin_conflicts = pin_conflicts.len(),
        "Roster assignment complete"
    );

    AssignmentResult {
        slots,
        summary,
        unfilled,
        pin_conflicts,
        workloads: run.workloads(),
    }
}

/// Records slots that arrive already assigned against their holders.
///
/// Holders outside the pool are kept on the slot but tracked nowhere.
fn seed_preassigned(slots: &[CoverageSlot], run: &mut Run<'_>) {
    for slot in slots {
        let Some(holder) = slot.assigned_employee_id() else {
            continue;
        };
        match run.position_of(holder) {
            Some(position) => run.ledgers[position].record(slot),
            None => debug!(
                date = %slot.date,
                shift = %slot.shift_name,
                employee_id = holder,
                "Pre-assigned slot holder is not in the pool"
            ),
        }
    }
}

/// Places every pin on the first open matching slot, in slot order.
///
/// Pins skip the configurable hard rules but never overlap or leave. Pins
/// do not move the rolling pointer.
fn place_pins(
    slots: &mut [CoverageSlot],
    run: &mut Run<'_>,
    leave: &LeaveMap,
) -> Vec<PinConflict> {
    let mut consumed: Vec<Vec<bool>> = run
        .order
        .iter()
        .map(|employee| vec![false; employee.pinned_shifts.len()])
        .collect();
    let mut conflicts: Vec<PinConflict> = Vec::new();

    for slot in slots.iter_mut() {
        for (position, employee) in run.order.iter().enumerate() {
            if slot.is_assigned() {
                break;
            }
            let Some(pin_index) = employee
                .pinned_shifts
                .iter()
                .enumerate()
                .position(|(index, pin)| !consumed[position][index] && pin.matches(slot))
            else {
                continue;
            };
            consumed[position][pin_index] = true;

            let reason: Option<PinConflictReason> =
                if leave.is_on_leave(&employee.internal_id, slot.date) {
                    Some(PinConflictReason::OnLeave)
                } else if run.ledgers[position].overlaps(slot) {
                    Some(PinConflictReason::Overlap)
                } else {
                    None
                };

            if let Some(reason) = reason {
                warn!(
                    employee_id = %employee.internal_id,
                    date = %slot.date,
                    shift = %slot.shift_name,
                    reason = %reason,
                    "Pinned shift could not be placed"
                );
                conflicts.push(PinConflict {
                    employee_id: employee.internal_id.clone(),
                    pin: employee.pinned_shifts[pin_index].clone(),
                    reason,
                });
            } else if slot.try_assign(&employee.internal_id) {
                run.ledgers[position].record(slot);
                debug!(
                    date = %slot.date,
                    shift = %slot.shift_name,
                    seat = slot.seat_index,
                    employee_id = %employee.internal_id,
                    "Placed pinned shift"
                );
            }
        }
    }

    for (position, employee) in run.order.iter().enumerate() {
        for (pin_index, pin) in employee.pinned_shifts.iter().enumerate() {
            if consumed[position][pin_index] {
                continue;
            }
            warn!(
                employee_id = %employee.internal_id,
                date = %pin.date,
                shift = %pin.shift_name,
                "Pinned shift matches no open slot"
            );
            conflicts.push(PinConflict {
                employee_id: employee.internal_id.clone(),
                pin: pin.clone(),
                reason: PinConflictReason::NoMatchingSlot,
            });
        }
    }

    conflicts
}

/// Ranks the pool for one slot, scanning from `pointer`.
fn select_candidate(
    slot: &CoverageSlot,
    run: &Run<'_>,
    leave: &LeaveMap,
    rules: &RuleSet,
    pointer: usize,
) -> Selection {
    let size: usize = run.order.len();
    let mut eligible: Vec<usize> = Vec::with_capacity(size);
    let mut rejections: Vec<CandidateRejection> = Vec::new();

    for step in 0..size {
        let position: usize = (pointer + step) % size;
        let employee: &Employee = run.order[position];
        match check_eligibility(slot, employee, &run.ledgers[position], leave, rules) {
            Ok(()) => eligible.push(position),
            Err(rejection) => rejections.push(CandidateRejection {
                employee_id: employee.internal_id.clone(),
                rejection,
            }),
        }
    }

    let context: ScoringContext =
        ScoringContext::from_ledgers(eligible.iter().map(|position| &run.ledgers[*position]));

    let mut best: Option<(usize, f64)> = None;
    for position in eligible {
        let score: f64 = score_candidate(
            slot,
            run.order[position],
            &run.ledgers[position],
            rules,
            context,
        );
        // Strictly greater keeps the earliest candidate on a tie
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    match best {
        Some((position, score)) => Selection::Winner { position, score },
        None => Selection::Nobody(rejections),
    }
}
