// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use time::macros::{date, time};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2025 - 02 - 04),
        end: date!(2025 - 02 - 03),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: start 2025-02-04 is after end 2025-02-03"
    );

    let err: DomainError = DomainError::InvalidHeadcount {
        shift_name: String::from("Morning"),
        headcount: 0,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid headcount 0 for shift 'Morning'. Must be at least 1"
    );

    let err: DomainError = DomainError::InvalidWeekday {
        shift_name: String::from("Morning"),
        index: 9,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid weekday index 9 for shift 'Morning'. Must be between 0 and 6"
    );

    let err: DomainError = DomainError::InvalidShiftName(String::from("test"));
    assert_eq!(format!("{err}"), "Invalid shift name: test");

    let err: DomainError = DomainError::InvalidShiftTimes {
        shift_name: String::from("Night"),
        start: time!(22:00),
        end: time!(22:00),
    };
    let message: String = format!("{err}");
    assert!(message.starts_with("Invalid times for shift 'Night': start 22:00"));
    assert!(message.ends_with("must differ"));

    let err: DomainError = DomainError::InvalidLeaveInterval {
        employee_id: String::from("emp1"),
        start: date!(2025 - 02 - 10),
        end: date!(2025 - 02 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid leave interval for employee 'emp1': 2025-02-10 is after 2025-02-01"
    );

    let err: DomainError = DomainError::InvalidRuleParameter {
        rule_id: String::from("max_consecutive_nights"),
        param: String::from("max_nights"),
        reason: String::from("must be a whole number"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid parameter 'max_nights' for rule 'max_consecutive_nights': must be a whole number"
    );
}
