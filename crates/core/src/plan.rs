// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::assign::assign_slots_to_employees;
use crate::error::CoreError;
use crate::result::AssignmentResult;
use roster_domain::{CoverageRule, CoverageSlot, Employee, LeaveMap, RuleSet, generate_coverage_slots};
use time::Date;

/// Everything needed to produce a roster from a coverage plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterRequest {
    /// The recurring coverage plan.
    pub coverage: Vec<CoverageRule>,
    /// First date of the roster (inclusive).
    pub range_start: Date,
    /// Last date of the roster (inclusive).
    pub range_end: Date,
    /// The employee pool.
    pub employees: Vec<Employee>,
    /// Leave and blackout intervals.
    pub leave: LeaveMap,
    /// The rule configuration.
    pub rules: RuleSet,
    /// Circular shift of the default employee order.
    pub rotation_offset: i64,
}

/// Generates the slots for the request's range and fills them.
///
/// # Errors
///
/// Returns an error if the coverage plan or the date range is malformed.
/// An infeasible roster is not an error; see `AssignmentResult::unfilled`.
pub fn build_roster(request: &RosterRequest) -> Result<AssignmentResult, CoreError> {
    let slots: Vec<CoverageSlot> =
        generate_coverage_slots(&request.coverage, request.range_start, request.range_end)?;

    Ok(assign_slots_to_employees(
        &slots,
        &request.employees,
        &request.leave,
        &request.rules,
        request.rotation_offset,
    ))
}
