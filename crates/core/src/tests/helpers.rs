// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::{
    CoverageRule, CoverageSlot, Employee, LeaveInterval, LeaveMap, Rule, RuleConfig, RuleSet,
    generate_coverage_slots,
};
use time::Date;
use time::macros::time;

/// Weekday indices Monday through Friday.
pub const WEEKDAYS: [u8; 5] = [1, 2, 3, 4, 5];

pub fn create_test_morning_rule(days: &[u8], headcount: u32) -> CoverageRule {
    CoverageRule::new(days.to_vec(), "Morning", time!(09:00), time!(17:00), headcount)
}

pub fn create_test_night_rule(days: &[u8]) -> CoverageRule {
    CoverageRule::new(days.to_vec(), "Night", time!(22:00), time!(06:00), 1)
}

/// Employees `emp1..=empN` with codes `E-001..`.
pub fn create_test_employees(count: usize) -> Vec<Employee> {
    (1..=count)
        .map(|n| Employee::new(&format!("emp{n}"), &format!("E-{n:03}")))
        .collect()
}

pub fn create_test_slots(rules: &[CoverageRule], start: Date, end: Date) -> Vec<CoverageSlot> {
    generate_coverage_slots(rules, start, end).unwrap()
}

pub fn create_test_leave(employee_id: &str, start: Date, end: Date) -> LeaveMap {
    LeaveMap::from_intervals([LeaveInterval::new(employee_id, start, end)]).unwrap()
}

pub fn rules_of(rules: Vec<Rule>) -> RuleSet {
    RuleSet::new(rules.into_iter().map(RuleConfig::enabled).collect())
}

/// Internal ids of the assignees, `None` for open slots.
pub fn holders(slots: &[CoverageSlot]) -> Vec<Option<&str>> {
    slots.iter().map(CoverageSlot::assigned_employee_id).collect()
}
