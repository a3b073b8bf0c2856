// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Dates travel as `YYYY-MM-DD` strings and times of day as `HH:MM`.

use crate::rule_config::RuleConfigRecord;
use serde::{Deserialize, Serialize};

/// One recurring coverage requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageRuleInput {
    /// Sunday-based weekday indices (0 = Sunday).
    pub days_of_week: Vec<u8>,
    /// The shift label.
    pub shift_name: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// End time (`HH:MM`). Earlier than the start for overnight shifts.
    pub end_time: String,
    /// Seats per matching date.
    pub required_headcount: u32,
}

/// API request to expand a coverage plan into slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSlotsRequest {
    /// The coverage plan.
    pub rules: Vec<CoverageRuleInput>,
    /// First date (inclusive).
    pub range_start: String,
    /// Last date (inclusive).
    pub range_end: String,
}

/// A single slot, as returned by generation and accepted by assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInfo {
    /// The date the shift starts on.
    pub date: String,
    /// The shift label.
    pub shift_name: String,
    /// Start time (`HH:MM`).
    pub start_time: String,
    /// End time (`HH:MM`).
    pub end_time: String,
    /// 0-based seat number.
    pub seat_index: u32,
    /// The assignee, if any.
    #[serde(default)]
    pub assigned_employee_id: Option<String>,
}

/// API response listing generated slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSlotsResponse {
    /// Slots ordered by date, rule order, then seat.
    pub slots: Vec<SlotInfo>,
}

/// A pinned shift on an employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnedShiftInput {
    /// The pinned date.
    pub date: String,
    /// The pinned shift label.
    pub shift_name: String,
}

/// An employee as supplied by the employee directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeInput {
    /// Opaque internal identifier.
    pub internal_id: String,
    /// Sortable employee code.
    pub employee_code: String,
    /// Preferred shift labels.
    #[serde(default)]
    pub preferred_shifts: Vec<String>,
    /// Shifts the employee must be given.
    #[serde(default)]
    pub pinned_shifts: Vec<PinnedShiftInput>,
}

/// A leave or blackout interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveInput {
    /// The employee's internal id.
    pub employee_id: String,
    /// First day (inclusive).
    pub start: String,
    /// Last day (inclusive).
    pub end: String,
}

/// API request to fill slots from an employee pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignRosterRequest {
    /// Slots in generator order.
    pub slots: Vec<SlotInfo>,
    /// The employee pool.
    pub employees: Vec<EmployeeInput>,
    /// Leave and blackout intervals.
    #[serde(default)]
    pub leave: Vec<LeaveInput>,
    /// Stored rule configuration. Every catalogue rule with its defaults
    /// when omitted.
    #[serde(default)]
    pub rules: Option<Vec<RuleConfigRecord>>,
    /// Circular shift of the default employee order.
    #[serde(default)]
    pub rotation_offset: i64,
}

/// API request to generate and fill a roster in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildRosterRequest {
    /// The coverage plan.
    pub coverage: Vec<CoverageRuleInput>,
    /// First date (inclusive).
    pub range_start: String,
    /// Last date (inclusive).
    pub range_end: String,
    /// The employee pool.
    pub employees: Vec<EmployeeInput>,
    /// Leave and blackout intervals.
    #[serde(default)]
    pub leave: Vec<LeaveInput>,
    /// Stored rule configuration. Every catalogue rule with its defaults
    /// when omitted.
    #[serde(default)]
    pub rules: Option<Vec<RuleConfigRecord>>,
    /// Circular shift of the default employee order.
    #[serde(default)]
    pub rotation_offset: i64,
}

/// Filled and unfilled slot counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryInfo {
    /// Slots with an assignee.
    pub assigned_slots: usize,
    /// Slots left open.
    pub unassigned_slots: usize,
}

/// Why one candidate could not take an open slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionInfo {
    /// The candidate's internal id.
    pub employee_id: String,
    /// The rule that excluded them.
    pub rule: String,
    /// Human-readable detail.
    pub message: String,
}

/// An open slot with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnfilledSlotInfo {
    /// Position of the slot in the response's slot list.
    pub slot_index: usize,
    /// One entry per candidate.
    pub rejections: Vec<RejectionInfo>,
}

/// A pin that could not be placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinConflictInfo {
    /// The employee holding the pin.
    pub employee_id: String,
    /// The pinned date.
    pub date: String,
    /// The pinned shift label.
    pub shift_name: String,
    /// `no_matching_slot`, `on_leave` or `overlap`.
    pub reason: String,
}

/// One employee's resulting workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadInfo {
    /// Internal id.
    pub employee_id: String,
    /// Employee code.
    pub employee_code: String,
    /// Slots held.
    pub assigned_slots: usize,
    /// Minutes held.
    pub assigned_minutes: i64,
}

/// API response for an assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignRosterResponse {
    /// Slots with assignees filled in.
    pub slots: Vec<SlotInfo>,
    /// The counts.
    pub summary: SummaryInfo,
    /// Open slots and why.
    pub unassigned: Vec<UnfilledSlotInfo>,
    /// Pins that were not placed.
    pub pin_conflicts: Vec<PinConflictInfo>,
    /// Per-employee totals in rotation order.
    pub workloads: Vec<WorkloadInfo>,
}

/// API request for a rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationRequest {
    /// The employee pool.
    pub employees: Vec<EmployeeInput>,
    /// Left rotation applied to the sorted order.
    #[serde(default)]
    pub offset: i64,
}

/// API response for a rotation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationResponse {
    /// Employee codes in scan order.
    pub employee_codes: Vec<String>,
}

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleDefinitionInfo {
    /// Stable rule identifier.
    pub id: String,
    /// `hard` or `soft`.
    pub kind: String,
    /// The tunable parameter, if any.
    pub param: Option<String>,
    /// The parameter's default.
    pub default_value: Option<f64>,
    /// What the rule does.
    pub description: String,
}

/// API response listing every recognized rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCatalogueResponse {
    /// The catalogue, hard rules first.
    pub rules: Vec<RuleDefinitionInfo>,
}
