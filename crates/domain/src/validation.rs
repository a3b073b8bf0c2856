// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{CoverageRule, LeaveInterval};
use time::Date;

/// Validates a coverage rule before it is expanded into slots.
///
/// # Arguments
///
/// * `rule` - The coverage rule to validate
///
/// # Errors
///
/// Returns an error if:
/// - The shift name is empty
/// - The headcount is zero
/// - A weekday index is outside `0..=6`
/// - The start and end times are identical
pub fn validate_coverage_rule(rule: &CoverageRule) -> Result<(), DomainError> {
    // Rule: shift name must not be blank
    if rule.shift_name.trim().is_empty() {
        return Err(DomainError::InvalidShiftName(String::from(
            "Shift name cannot be empty",
        )));
    }

    // Rule: at least one seat per matching date
    if rule.required_headcount == 0 {
        return Err(DomainError::InvalidHeadcount {
            shift_name: rule.shift_name.clone(),
            headcount: rule.required_headcount,
        });
    }

    if let Some(index) = rule.days_of_week.iter().copied().find(|day| *day > 6) {
        return Err(DomainError::InvalidWeekday {
            shift_name: rule.shift_name.clone(),
            index,
        });
    }

    // Rule: zero-length shifts are malformed; end < start means overnight
    if rule.start_time == rule.end_time {
        return Err(DomainError::InvalidShiftTimes {
            shift_name: rule.shift_name.clone(),
            start: rule.start_time,
            end: rule.end_time,
        });
    }

    Ok(())
}

/// Validates that an inclusive date range is not inverted.
///
/// # Errors
///
/// Returns an error if `start` is after `end`.
pub fn validate_date_range(start: Date, end: Date) -> Result<(), DomainError> {
    if start > end {
        return Err(DomainError::InvalidDateRange { start, end });
    }
    Ok(())
}

/// Validates a leave interval.
///
/// # Errors
///
/// Returns an error if the interval ends before it starts.
pub fn validate_leave_interval(interval: &LeaveInterval) -> Result<(), DomainError> {
    if interval.start > interval.end {
        return Err(DomainError::InvalidLeaveInterval {
            employee_id: interval.employee_internal_id.clone(),
            start: interval.start,
            end: interval.end,
        });
    }
    Ok(())
}
