// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    WEEKDAYS, create_test_employees, create_test_leave, create_test_morning_rule,
    create_test_night_rule, create_test_slots, holders, rules_of,
};
use crate::{AssignmentResult, Rejection, assign_slots_to_employees};
use roster_domain::{
    CoverageRule, CoverageSlot, Employee, LeaveMap, Rule, RuleConfig, RuleSet,
};
use time::macros::{date, time};

#[test]
fn test_employee_on_leave_leaves_second_seat_open() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[1, 2], 2)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 03),
    );
    let employees: Vec<Employee> = create_test_employees(2);
    let leave: LeaveMap = create_test_leave("emp2", date!(2025 - 02 - 03), date!(2025 - 02 - 03));

    let result: AssignmentResult =
        assign_slots_to_employees(&slots, &employees, &leave, &RuleSet::standard(), 0);

    assert_eq!(result.summary.assigned_slots, 1);
    assert_eq!(result.summary.unassigned_slots, 1);
    assert_eq!(holders(&result.slots), vec![Some("emp1"), None]);

    assert_eq!(result.unfilled.len(), 1);
    let unfilled = &result.unfilled[0];
    assert_eq!(unfilled.slot_index, 1);
    let reasons: Vec<(&str, &Rejection)> = unfilled
        .rejections
        .iter()
        .map(|r| (r.employee_id.as_str(), &r.rejection))
        .collect();
    assert_eq!(
        reasons,
        vec![("emp2", &Rejection::OnLeave), ("emp1", &Rejection::Overlap)]
    );
}

#[test]
fn test_leave_is_honoured_without_any_rules() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[1, 2], 2)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 03),
    );
    let employees: Vec<Employee> = create_test_employees(2);
    let leave: LeaveMap = create_test_leave("emp2", date!(2025 - 02 - 03), date!(2025 - 02 - 03));

    for rules in [
        RuleSet::default(),
        RuleSet::new(vec![RuleConfig::disabled(Rule::NoBlackoutAssignments)]),
    ] {
        let result: AssignmentResult =
            assign_slots_to_employees(&slots, &employees, &leave, &rules, 0);

        assert_eq!(result.summary.assigned_slots, 1);
        assert_eq!(result.summary.unassigned_slots, 1);
        assert_eq!(holders(&result.slots), vec![Some("emp1"), None]);
        assert_eq!(
            result.unfilled[0].rejections[0].rejection,
            Rejection::OnLeave
        );
    }
}

#[test]
fn test_repeated_employee_id_is_booked_once() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[1], 2)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 03),
    );
    let employees: Vec<Employee> = vec![
        Employee::new("emp1", "E-001"),
        Employee::new("emp1", "E-002"),
    ];

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &LeaveMap::new(),
        &RuleSet::standard(),
        0,
    );

    assert_eq!(holders(&result.slots), vec![Some("emp1"), None]);
    assert_eq!(result.unfilled[0].rejections.len(), 1);
    assert_eq!(
        result.unfilled[0].rejections[0].rejection,
        Rejection::Overlap
    );
    assert_eq!(result.workloads.len(), 1);
    assert_eq!(result.workloads[0].employee_code, "E-001");
}

#[test]
fn test_round_robin_spreads_assignments() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&WEEKDAYS, 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 07),
    );

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &create_test_employees(3),
        &LeaveMap::new(),
        &RuleSet::default(),
        0,
    );

    assert_eq!(
        holders(&result.slots),
        vec![
            Some("emp1"),
            Some("emp2"),
            Some("emp3"),
            Some("emp1"),
            Some("emp2")
        ]
    );
    assert!(result.is_complete());
}

#[test]
fn test_rotation_offset_moves_starting_employee() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&WEEKDAYS, 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 04),
    );

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &create_test_employees(3),
        &LeaveMap::new(),
        &RuleSet::default(),
        1,
    );

    assert_eq!(holders(&result.slots), vec![Some("emp2"), Some("emp3")]);
}

#[test]
fn test_preference_outranks_rotation() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[1], 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 03),
    );
    let employees: Vec<Employee> = vec![
        Employee::new("emp1", "E-001"),
        Employee::new("emp2", "E-002").with_preferred_shift("Morning"),
    ];

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &LeaveMap::new(),
        &rules_of(vec![Rule::EmployeeShiftPreferences { weight: 1.0 }]),
        0,
    );

    assert_eq!(holders(&result.slots), vec![Some("emp2")]);
}

#[test]
fn test_balance_favours_employee_with_fewer_hours() {
    let mut held: CoverageSlot = CoverageSlot::new(
        date!(2025 - 02 - 03),
        "Morning",
        time!(09:00),
        time!(17:00),
        0,
    );
    assert!(held.try_assign("emp1"));
    let open: CoverageSlot = CoverageSlot::new(
        date!(2025 - 02 - 04),
        "Morning",
        time!(09:00),
        time!(17:00),
        0,
    );

    let result: AssignmentResult = assign_slots_to_employees(
        &[held, open],
        &create_test_employees(2),
        &LeaveMap::new(),
        &rules_of(vec![Rule::BalanceTotalHours { weight: 1.0 }]),
        0,
    );

    // emp1 is first in the scan but already holds eight hours
    assert_eq!(holders(&result.slots), vec![Some("emp1"), Some("emp2")]);
    assert_eq!(result.summary.assigned_slots, 2);
}

#[test]
fn test_split_weekend_penalty_keeps_weekend_together() {
    // Saturday then Sunday, one seat each
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[6, 0], 1)],
        date!(2025 - 02 - 08),
        date!(2025 - 02 - 09),
    );

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &create_test_employees(2),
        &LeaveMap::new(),
        &rules_of(vec![Rule::AvoidSplitWeekends { weight: 1.0 }]),
        0,
    );

    // Round robin alone would hand Sunday to emp2
    assert_eq!(holders(&result.slots), vec![Some("emp1"), Some("emp1")]);
}

#[test]
fn test_min_rest_explains_open_slot() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_night_rule(&[1]), create_test_morning_rule(&[2], 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 04),
    );

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &create_test_employees(1),
        &LeaveMap::new(),
        &rules_of(vec![Rule::MinRestHoursBetweenShifts { min_hours: 11 }]),
        0,
    );

    assert_eq!(holders(&result.slots), vec![Some("emp1"), None]);
    assert_eq!(
        result.unfilled[0].rejections[0].rejection,
        Rejection::InsufficientRest {
            rest_minutes: 180,
            min_hours: 11
        }
    );
}

#[test]
fn test_overnight_shift_blocks_overlapping_early_shift() {
    let rules: Vec<CoverageRule> = vec![
        create_test_night_rule(&[1]),
        CoverageRule::new(vec![2], "Early", time!(05:00), time!(09:00), 1),
    ];
    let slots: Vec<CoverageSlot> =
        create_test_slots(&rules, date!(2025 - 02 - 03), date!(2025 - 02 - 04));

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &create_test_employees(1),
        &LeaveMap::new(),
        &RuleSet::default(),
        0,
    );

    assert_eq!(holders(&result.slots), vec![Some("emp1"), None]);
    assert_eq!(
        result.unfilled[0].rejections[0].rejection,
        Rejection::Overlap
    );
}

#[test]
fn test_consecutive_nights_limit_hands_over_to_next_employee() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_night_rule(&WEEKDAYS)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 05),
    );
    let employees: Vec<Employee> = create_test_employees(2);
    // emp2 is away, so emp1 carries nights until the limit
    let leave: LeaveMap = create_test_leave("emp2", date!(2025 - 02 - 03), date!(2025 - 02 - 04));

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &leave,
        &rules_of(vec![
            Rule::NoBlackoutAssignments,
            Rule::MaxConsecutiveNights { max_nights: 2 },
        ]),
        0,
    );

    assert_eq!(
        holders(&result.slots),
        vec![Some("emp1"), Some("emp1"), Some("emp2")]
    );
}

#[test]
fn test_weekly_night_limit_hands_over_to_next_employee() {
    // Monday 3rd through Monday 10th, weekdays only
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_night_rule(&WEEKDAYS)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 10),
    );
    let employees: Vec<Employee> = vec![
        Employee::new("emp1", "E-001").with_preferred_shift("Night"),
        Employee::new("emp2", "E-002"),
        Employee::new("emp3", "E-003"),
    ];

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &LeaveMap::new(),
        &rules_of(vec![
            Rule::EmployeeShiftPreferences { weight: 1.0 },
            Rule::MaxNightShiftsPerWeek { max_shifts: 2 },
        ]),
        0,
    );

    // emp1 wants every night but gets two per ISO week
    assert_eq!(
        holders(&result.slots),
        vec![
            Some("emp1"),
            Some("emp1"),
            Some("emp2"),
            Some("emp3"),
            Some("emp2"),
            Some("emp1")
        ]
    );
    assert!(result.is_complete());
}

#[test]
fn test_consecutive_work_days_limit_hands_over_to_next_employee() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&WEEKDAYS, 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 06),
    );
    let employees: Vec<Employee> = vec![
        Employee::new("emp1", "E-001").with_preferred_shift("Morning"),
        Employee::new("emp2", "E-002"),
    ];

    let result: AssignmentResult = assign_slots_to_employees(
        &slots,
        &employees,
        &LeaveMap::new(),
        &rules_of(vec![
            Rule::EmployeeShiftPreferences { weight: 1.0 },
            Rule::MaxConsecutiveWorkDays { max_days: 2 },
        ]),
        0,
    );

    // A day off on Wednesday resets emp1's run
    assert_eq!(
        holders(&result.slots),
        vec![Some("emp1"), Some("emp1"), Some("emp2"), Some("emp1")]
    );
}

#[test]
fn test_unrecognized_and_disabled_rules_change_nothing() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&WEEKDAYS, 2)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 07),
    );
    let employees: Vec<Employee> = create_test_employees(3);
    let leave: LeaveMap = create_test_leave("emp1", date!(2025 - 02 - 04), date!(2025 - 02 - 05));
    let noisy: RuleSet = RuleSet::new(vec![
        RuleConfig::enabled(Rule::Unrecognized {
            id: String::from("max_coffee_breaks"),
        }),
        RuleConfig::disabled(Rule::MaxConsecutiveWorkDays { max_days: 1 }),
        RuleConfig::disabled(Rule::NoBlackoutAssignments),
    ]);

    let baseline: AssignmentResult =
        assign_slots_to_employees(&slots, &employees, &leave, &RuleSet::default(), 0);
    let result: AssignmentResult = assign_slots_to_employees(&slots, &employees, &leave, &noisy, 0);

    assert_eq!(result, baseline);
}

#[test]
fn test_empty_pool_reports_every_slot() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&[1], 3)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 03),
    );

    let result: AssignmentResult =
        assign_slots_to_employees(&slots, &[], &LeaveMap::new(), &RuleSet::standard(), 5);

    assert_eq!(result.summary.assigned_slots, 0);
    assert_eq!(result.summary.unassigned_slots, 3);
    assert_eq!(result.unfilled.len(), 3);
    assert!(result.unfilled.iter().all(|u| u.rejections.is_empty()));
    assert!(result.workloads.is_empty());
}

#[test]
fn test_no_slots_yields_empty_result() {
    let result: AssignmentResult = assign_slots_to_employees(
        &[],
        &create_test_employees(2),
        &LeaveMap::new(),
        &RuleSet::standard(),
        0,
    );

    assert!(result.slots.is_empty());
    assert!(result.is_complete());
    assert_eq!(result.workloads.len(), 2);
}

#[test]
fn test_preassigned_slot_is_kept_for_unknown_holder() {
    let mut held: CoverageSlot = CoverageSlot::new(
        date!(2025 - 02 - 03),
        "Morning",
        time!(09:00),
        time!(17:00),
        0,
    );
    assert!(held.try_assign("contractor-9"));

    let result: AssignmentResult = assign_slots_to_employees(
        &[held],
        &create_test_employees(1),
        &LeaveMap::new(),
        &RuleSet::standard(),
        0,
    );

    assert_eq!(holders(&result.slots), vec![Some("contractor-9")]);
    assert_eq!(result.summary.assigned_slots, 1);
    assert_eq!(result.workloads[0].assigned_slots, 0);
}

#[test]
fn test_workloads_follow_rotation_order() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[create_test_morning_rule(&WEEKDAYS, 1)],
        date!(2025 - 02 - 03),
        date!(2025 - 02 - 05),
    );
    let employees: Vec<Employee> = vec![
        Employee::new("emp2", "E-002"),
        Employee::new("emp1", "E-001"),
    ];

    let result: AssignmentResult =
        assign_slots_to_employees(&slots, &employees, &LeaveMap::new(), &RuleSet::default(), 0);

    let loads: Vec<(&str, usize, i64)> = result
        .workloads
        .iter()
        .map(|w| (w.employee_code.as_str(), w.assigned_slots, w.assigned_minutes))
        .collect();
    assert_eq!(loads, vec![("E-001", 2, 960), ("E-002", 1, 480)]);
    assert_eq!(result.slots_for("emp1").count(), 2);
}

#[test]
fn test_identical_inputs_give_identical_results() {
    let slots: Vec<CoverageSlot> = create_test_slots(
        &[
            create_test_morning_rule(&[0, 1, 2, 3, 4, 5, 6], 2),
            create_test_night_rule(&[0, 1, 2, 3, 4, 5, 6]),
        ],
        date!(2025 - 02 - 01),
        date!(2025 - 02 - 28),
    );
    let employees: Vec<Employee> = create_test_employees(6);
    let leave: LeaveMap = create_test_leave("emp3", date!(2025 - 02 - 10), date!(2025 - 02 - 14));

    let first: AssignmentResult =
        assign_slots_to_employees(&slots, &employees, &leave, &RuleSet::standard(), 2);
    let second: AssignmentResult =
        assign_slots_to_employees(&slots, &employees, &leave, &RuleSet::standard(), 2);

    assert_eq!(first, second);
}
