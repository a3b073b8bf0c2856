// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{CoverageRuleInput, EmployeeInput, GenerateSlotsRequest, LeaveInput};
use std::collections::BTreeMap;

use crate::RuleConfigRecord;

pub fn create_test_morning_input() -> CoverageRuleInput {
    CoverageRuleInput {
        days_of_week: vec![1, 2],
        shift_name: String::from("Morning"),
        start_time: String::from("09:00"),
        end_time: String::from("17:00"),
        required_headcount: 2,
    }
}

pub fn create_test_generate_request(range_start: &str, range_end: &str) -> GenerateSlotsRequest {
    GenerateSlotsRequest {
        rules: vec![create_test_morning_input()],
        range_start: String::from(range_start),
        range_end: String::from(range_end),
    }
}

pub fn create_test_employee(internal_id: &str, employee_code: &str) -> EmployeeInput {
    EmployeeInput {
        internal_id: String::from(internal_id),
        employee_code: String::from(employee_code),
        preferred_shifts: Vec::new(),
        pinned_shifts: Vec::new(),
    }
}

pub fn create_test_leave(employee_id: &str, start: &str, end: &str) -> LeaveInput {
    LeaveInput {
        employee_id: String::from(employee_id),
        start: String::from(start),
        end: String::from(end),
    }
}

pub fn create_test_record(id: &str, kind: Option<&str>, params: &[(&str, f64)]) -> RuleConfigRecord {
    RuleConfigRecord {
        id: String::from(id),
        kind: kind.map(String::from),
        enabled: true,
        params: params
            .iter()
            .map(|(name, value)| (String::from(*name), *value))
            .collect::<BTreeMap<String, f64>>(),
        weight: None,
    }
}
