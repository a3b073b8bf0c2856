// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoverageRule, DomainError, validate_coverage_rule, validate_date_range};
use time::macros::{date, time};

fn create_test_rule() -> CoverageRule {
    CoverageRule::new(vec![1, 2, 3], "Morning", time!(09:00), time!(17:00), 2)
}

#[test]
fn test_validate_coverage_rule_accepts_valid_rule() {
    let rule: CoverageRule = create_test_rule();

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(result.is_ok());
}

#[test]
fn test_validate_coverage_rule_accepts_overnight_rule() {
    let rule: CoverageRule = CoverageRule::new(vec![5], "Night", time!(22:00), time!(06:00), 1);

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(result.is_ok());
}

#[test]
fn test_validate_coverage_rule_rejects_blank_shift_name() {
    let mut rule: CoverageRule = create_test_rule();
    rule.shift_name = String::from("   ");

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(matches!(result, Err(DomainError::InvalidShiftName(_))));
}

#[test]
fn test_validate_coverage_rule_rejects_zero_headcount() {
    let mut rule: CoverageRule = create_test_rule();
    rule.required_headcount = 0;

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(matches!(
        result,
        Err(DomainError::InvalidHeadcount { headcount: 0, .. })
    ));
}

#[test]
fn test_validate_coverage_rule_rejects_weekday_seven() {
    let mut rule: CoverageRule = create_test_rule();
    rule.days_of_week = vec![1, 7];

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(matches!(
        result,
        Err(DomainError::InvalidWeekday { index: 7, .. })
    ));
}

#[test]
fn test_validate_coverage_rule_rejects_zero_length_shift() {
    let mut rule: CoverageRule = create_test_rule();
    rule.end_time = rule.start_time;

    let result: Result<(), DomainError> = validate_coverage_rule(&rule);
    assert!(matches!(
        result,
        Err(DomainError::InvalidShiftTimes { .. })
    ));
}

#[test]
fn test_validate_date_range() {
    assert!(validate_date_range(date!(2025 - 02 - 03), date!(2025 - 02 - 03)).is_ok());
    assert!(validate_date_range(date!(2025 - 02 - 03), date!(2025 - 02 - 09)).is_ok());
    assert!(matches!(
        validate_date_range(date!(2025 - 02 - 09), date!(2025 - 02 - 03)),
        Err(DomainError::InvalidDateRange { .. })
    ));
}
