// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::constraints::Rejection;
use roster_domain::{CoverageSlot, PinnedShift};

/// Counts of filled and unfilled slots.
///
/// `assigned_slots + unassigned_slots` always equals the number of slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Slots with an assignee.
    pub assigned_slots: usize,
    /// Slots left open.
    pub unassigned_slots: usize,
}

impl Summary {
    /// Counts the slots.
    #[must_use]
    pub fn from_slots(slots: &[CoverageSlot]) -> Self {
        let assigned_slots: usize = slots.iter().filter(|slot| slot.is_assigned()).count();
        Self {
            assigned_slots,
            unassigned_slots: slots.len() - assigned_slots,
        }
    }
}

/// One candidate's reason for not taking a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRejection {
    /// The candidate's internal id.
    pub employee_id: String,
    /// The first rule that excluded them.
    pub rejection: Rejection,
}

/// A slot nobody could take, with every candidate's reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfilledSlot {
    /// Position of the slot in `AssignmentResult::slots`.
    pub slot_index: usize,
    /// Rejections in rotated-pool order.
    pub rejections: Vec<CandidateRejection>,
}

/// Why a pin could not be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PinConflictReason {
    /// No open slot matched the pin's date and shift.
    NoMatchingSlot,
    /// The employee is on leave on the pinned date.
    OnLeave,
    /// The pinned slot overlaps another shift the employee holds.
    Overlap,
}

impl PinConflictReason {
    /// Stable identifier used in responses.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoMatchingSlot => "no_matching_slot",
            Self::OnLeave => "on_leave",
            Self::Overlap => "overlap",
        }
    }
}

impl std::fmt::Display for PinConflictReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A pin that was not placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConflict {
    /// The employee holding the pin.
    pub employee_id: String,
    /// The pin itself.
    pub pin: PinnedShift,
    /// Why it was not placed.
    pub reason: PinConflictReason,
}

/// What one employee ended up holding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeWorkload {
    /// Internal id.
    pub employee_id: String,
    /// Employee code.
    pub employee_code: String,
    /// Slots held.
    pub assigned_slots: usize,
    /// Minutes held.
    pub assigned_minutes: i64,
}

/// Output of one assignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentResult {
    /// The input slots, in input order, with assignees filled in.
    pub slots: Vec<CoverageSlot>,
    /// Filled and unfilled counts.
    pub summary: Summary,
    /// Slots left open and why.
    pub unfilled: Vec<UnfilledSlot>,
    /// Pins that could not be placed.
    pub pin_conflicts: Vec<PinConflict>,
    /// Per-employee totals in rotation order.
    pub workloads: Vec<EmployeeWorkload>,
}

impl AssignmentResult {
    /// Returns the slots held by an employee.
    pub fn slots_for<'a>(&'a self, employee_id: &'a str) -> impl Iterator<Item = &'a CoverageSlot> {
        self.slots
            .iter()
            .filter(move |slot| slot.assigned_employee_id() == Some(employee_id))
    }

    /// Returns whether every slot was filled.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.summary.unassigned_slots == 0
    }
}
