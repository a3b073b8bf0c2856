// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler parses its string-typed request into domain types, calls
//! the engine, and converts the result back into response DTOs. All
//! parsing failures surface as `ApiError::InvalidInput` naming the field.

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignRosterRequest, AssignRosterResponse, BuildRosterRequest, CoverageRuleInput,
    EmployeeInput, GenerateSlotsRequest, GenerateSlotsResponse, LeaveInput, PinConflictInfo,
    RejectionInfo, RotationRequest, RotationResponse, RuleCatalogueResponse, RuleDefinitionInfo,
    SlotInfo, SummaryInfo, UnfilledSlotInfo, WorkloadInfo,
};
use crate::rule_config::{RuleConfigRecord, parse_rule_set};
use roster::{AssignmentResult, RosterRequest, assign_slots_to_employees};
use roster_domain::{
    CoverageRule, CoverageSlot, Employee, LeaveInterval, LeaveMap, RuleSet, rotation_order,
    rule_catalogue,
};
use std::collections::BTreeSet;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Time};

const DATE_FORMAT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[FormatItem<'_>] = format_description!("[hour]:[minute]");

fn parse_date(field: &str, value: &str) -> Result<Date, ApiError> {
    Date::parse(value.trim(), DATE_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Invalid date format: {value}"),
    })
}

fn parse_time(field: &str, value: &str) -> Result<Time, ApiError> {
    Time::parse(value.trim(), TIME_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Invalid time format: {value}"),
    })
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

fn parse_coverage_rules(rules: &[CoverageRuleInput]) -> Result<Vec<CoverageRule>, ApiError> {
    rules
        .iter()
        .enumerate()
        .map(|(index, rule)| -> Result<CoverageRule, ApiError> {
            Ok(CoverageRule::new(
                rule.days_of_week.clone(),
                &rule.shift_name,
                parse_time(&format!("rules[{index}].start_time"), &rule.start_time)?,
                parse_time(&format!("rules[{index}].end_time"), &rule.end_time)?,
                rule.required_headcount,
            ))
        })
        .collect()
}

fn parse_slots(slots: &[SlotInfo]) -> Result<Vec<CoverageSlot>, ApiError> {
    slots
        .iter()
        .enumerate()
        .map(|(index, info)| -> Result<CoverageSlot, ApiError> {
            let start: Time = parse_time(&format!("slots[{index}].start_time"), &info.start_time)?;
            let end: Time = parse_time(&format!("slots[{index}].end_time"), &info.end_time)?;
            if start == end {
                return Err(ApiError::InvalidInput {
                    field: format!("slots[{index}].end_time"),
                    message: String::from("Shift start and end must differ"),
                });
            }

            let mut slot: CoverageSlot = CoverageSlot::new(
                parse_date(&format!("slots[{index}].date"), &info.date)?,
                &info.shift_name,
                start,
                end,
                info.seat_index,
            );
            if let Some(employee_id) = &info.assigned_employee_id {
                slot = slot.with_assignee(employee_id);
            }
            Ok(slot)
        })
        .collect()
}

fn parse_employees(employees: &[EmployeeInput]) -> Result<Vec<Employee>, ApiError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut parsed: Vec<Employee> = Vec::with_capacity(employees.len());

    for (index, input) in employees.iter().enumerate() {
        if input.internal_id.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: format!("employees[{index}].internal_id"),
                message: String::from("Internal id must not be empty"),
            });
        }
        if input.employee_code.trim().is_empty() {
            return Err(ApiError::InvalidInput {
                field: format!("employees[{index}].employee_code"),
                message: String::from("Employee code must not be empty"),
            });
        }
        if !seen.insert(input.internal_id.as_str()) {
            return Err(ApiError::InvalidInput {
                field: format!("employees[{index}].internal_id"),
                message: format!("Duplicate internal id '{}'", input.internal_id),
            });
        }

        let mut employee: Employee = Employee::new(&input.internal_id, &input.employee_code);
        for shift_name in &input.preferred_shifts {
            employee = employee.with_preferred_shift(shift_name);
        }
        for (pin_index, pin) in input.pinned_shifts.iter().enumerate() {
            let date: Date = parse_date(
                &format!("employees[{index}].pinned_shifts[{pin_index}].date"),
                &pin.date,
            )?;
            employee = employee.with_pinned_shift(date, &pin.shift_name);
        }
        parsed.push(employee);
    }

    Ok(parsed)
}

fn parse_leave(leave: &[LeaveInput]) -> Result<LeaveMap, ApiError> {
    let mut map: LeaveMap = LeaveMap::new();
    for (index, input) in leave.iter().enumerate() {
        let interval: LeaveInterval = LeaveInterval::new(
            &input.employee_id,
            parse_date(&format!("leave[{index}].start"), &input.start)?,
            parse_date(&format!("leave[{index}].end"), &input.end)?,
        );
        map.insert(interval).map_err(translate_domain_error)?;
    }
    Ok(map)
}

fn parse_rules(records: Option<&[RuleConfigRecord]>) -> Result<RuleSet, ApiError> {
    records.map_or_else(
        || Ok(RuleSet::standard()),
        |records| parse_rule_set(records).map_err(ApiError::from),
    )
}

fn slot_info(slot: &CoverageSlot) -> SlotInfo {
    SlotInfo {
        date: format_date(slot.date),
        shift_name: slot.shift_name.clone(),
        start_time: format_time(slot.start_time),
        end_time: format_time(slot.end_time),
        seat_index: slot.seat_index,
        assigned_employee_id: slot.assigned_employee_id().map(str::to_string),
    }
}

fn assignment_response(result: &AssignmentResult) -> AssignRosterResponse {
    AssignRosterResponse {
        slots: result.slots.iter().map(slot_info).collect(),
        summary: SummaryInfo {
            assigned_slots: result.summary.assigned_slots,
            unassigned_slots: result.summary.unassigned_slots,
        },
        unassigned: result
            .unfilled
            .iter()
            .map(|unfilled| UnfilledSlotInfo {
                slot_index: unfilled.slot_index,
                rejections: unfilled
                    .rejections
                    .iter()
                    .map(|candidate| RejectionInfo {
                        employee_id: candidate.employee_id.clone(),
                        rule: candidate.rejection.rule_id().to_string(),
                        message: candidate.rejection.to_string(),
                    })
                    .collect(),
            })
            .collect(),
        pin_conflicts: result
            .pin_conflicts
            .iter()
            .map(|conflict| PinConflictInfo {
                employee_id: conflict.employee_id.clone(),
                date: format_date(conflict.pin.date),
                shift_name: conflict.pin.shift_name.clone(),
                reason: conflict.reason.as_str().to_string(),
            })
            .collect(),
        workloads: result
            .workloads
            .iter()
            .map(|workload| WorkloadInfo {
                employee_id: workload.employee_id.clone(),
                employee_code: workload.employee_code.clone(),
                assigned_slots: workload.assigned_slots,
                assigned_minutes: workload.assigned_minutes,
            })
            .collect(),
    }
}

/// Expands a coverage plan into slots.
///
/// # Arguments
///
/// * `request` - The coverage plan and date range
///
/// # Errors
///
/// Returns an error if:
/// - A date or time does not parse
/// - The range is inverted
/// - A rule has no seats, a bad weekday, a blank name or equal times
pub fn generate_coverage_slots(
    request: &GenerateSlotsRequest,
) -> Result<GenerateSlotsResponse, ApiError> {
    let rules: Vec<CoverageRule> = parse_coverage_rules(&request.rules)?;
    let range_start: Date = parse_date("range_start", &request.range_start)?;
    let range_end: Date = parse_date("range_end", &request.range_end)?;

    let slots: Vec<CoverageSlot> =
        roster_domain::generate_coverage_slots(&rules, range_start, range_end)
            .map_err(translate_domain_error)?;

    Ok(GenerateSlotsResponse {
        slots: slots.iter().map(slot_info).collect(),
    })
}

/// Fills slots from an employee pool.
///
/// An infeasible roster is not an error: open slots are listed in the
/// response with every candidate's rejection.
///
/// # Errors
///
/// Returns an error if:
/// - A date or time does not parse
/// - An employee id or code is blank, or an id repeats
/// - A leave interval ends before it starts
/// - A rule record is malformed
pub fn assign_roster(request: &AssignRosterRequest) -> Result<AssignRosterResponse, ApiError> {
    let slots: Vec<CoverageSlot> = parse_slots(&request.slots)?;
    let employees: Vec<Employee> = parse_employees(&request.employees)?;
    let leave: LeaveMap = parse_leave(&request.leave)?;
    let rules: RuleSet = parse_rules(request.rules.as_deref())?;

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &leave,
        &rules,
        request.rotation_offset,
    );

    Ok(assignment_response(&result))
}

/// Generates slots for a coverage plan and fills them in one call.
///
/// # Errors
///
/// Returns an error for any input `generate_coverage_slots` or
/// `assign_roster` would reject.
pub fn build_roster(request: &BuildRosterRequest) -> Result<AssignRosterResponse, ApiError> {
    let roster_request: RosterRequest = RosterRequest {
        coverage: parse_coverage_rules(&request.coverage)?,
        range_start: parse_date("range_start", &request.range_start)?,
        range_end: parse_date("range_end", &request.range_end)?,
        employees: parse_employees(&request.employees)?,
        leave: parse_leave(&request.leave)?,
        rules: parse_rules(request.rules.as_deref())?,
        rotation_offset: request.rotation_offset,
    };

    let result: AssignmentResult =
        roster::build_roster(&roster_request).map_err(translate_core_error)?;

    Ok(assignment_response(&result))
}

/// Returns the scan order for an employee pool.
///
/// # Errors
///
/// Returns an error if an employee record is invalid.
pub fn rotation(request: &RotationRequest) -> Result<RotationResponse, ApiError> {
    let employees: Vec<Employee> = parse_employees(&request.employees)?;

    Ok(RotationResponse {
        employee_codes: rotation_order(&employees, request.offset)
            .into_iter()
            .map(|employee| employee.employee_code.clone())
            .collect(),
    })
}

/// Lists every recognized rule.
#[must_use]
pub fn rule_catalogue_response() -> RuleCatalogueResponse {
    RuleCatalogueResponse {
        rules: rule_catalogue()
            .iter()
            .map(|definition| RuleDefinitionInfo {
                id: definition.id.to_string(),
                kind: definition.kind.as_str().to_string(),
                param: definition.param.map(str::to_string),
                default_value: definition.default_value,
                description: definition.description.to_string(),
            })
            .collect(),
    }
}
