// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::validation::validate_leave_interval;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::macros::time;
use time::{Date, Duration, PrimitiveDateTime, Time, Weekday};

/// Shifts starting at or after this time are night shifts.
const NIGHT_STARTS_AT: Time = time!(20:00);

/// Shifts ending at or before this time are night shifts.
const NIGHT_ENDS_BY: Time = time!(06:00);

/// Returns the Sunday-based weekday index (`0 = Sunday` .. `6 = Saturday`).
#[must_use]
pub const fn weekday_index(weekday: Weekday) -> u8 {
    weekday.number_days_from_sunday()
}

/// A recurring weekly coverage requirement.
///
/// A rule is a pattern, not a calendar entry. It only becomes concrete
/// slots once expanded over a date range by `generate_coverage_slots`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverageRule {
    /// Sunday-based weekday indices the rule applies to.
    pub days_of_week: Vec<u8>,
    /// Shift label, e.g. "Morning".
    pub shift_name: String,
    /// Local start time.
    pub start_time: Time,
    /// Local end time. Earlier than `start_time` for overnight shifts.
    pub end_time: Time,
    /// Seats needed on each matching date.
    pub required_headcount: u32,
}

impl CoverageRule {
    /// Creates a new `CoverageRule`.
    ///
    /// # Arguments
    ///
    /// * `days_of_week` - Sunday-based weekday indices
    /// * `shift_name` - The shift label
    /// * `start_time` - Local start time
    /// * `end_time` - Local end time
    /// * `required_headcount` - Seats per matching date
    #[must_use]
    pub fn new(
        days_of_week: Vec<u8>,
        shift_name: &str,
        start_time: Time,
        end_time: Time,
        required_headcount: u32,
    ) -> Self {
        Self {
            days_of_week,
            shift_name: shift_name.to_string(),
            start_time,
            end_time,
            required_headcount,
        }
    }

    /// Returns whether this rule requires coverage on the given date.
    #[must_use]
    pub fn applies_on(&self, date: Date) -> bool {
        self.days_of_week.contains(&weekday_index(date.weekday()))
    }
}

/// One dated, single-headcount seat to be filled by at most one employee.
///
/// Everything except the assignee is fixed at generation time. The
/// assignee can be written once and never overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoverageSlot {
    /// The calendar date the shift starts on.
    pub date: Date,
    /// Shift label copied from the originating rule.
    pub shift_name: String,
    /// Local start time.
    pub start_time: Time,
    /// Local end time.
    pub end_time: Time,
    /// 0-based seat number within the rule's headcount.
    pub seat_index: u32,
    /// The assigned employee's internal id, if any.
    assigned_employee_id: Option<String>,
}

impl CoverageSlot {
    /// Creates a new unassigned `CoverageSlot`.
    #[must_use]
    pub fn new(
        date: Date,
        shift_name: &str,
        start_time: Time,
        end_time: Time,
        seat_index: u32,
    ) -> Self {
        Self {
            date,
            shift_name: shift_name.to_string(),
            start_time,
            end_time,
            seat_index,
            assigned_employee_id: None,
        }
    }

    /// Creates the `seat_index`-th slot of a coverage rule on a date.
    #[must_use]
    pub fn from_rule(rule: &CoverageRule, date: Date, seat_index: u32) -> Self {
        Self::new(
            date,
            &rule.shift_name,
            rule.start_time,
            rule.end_time,
            seat_index,
        )
    }

    /// Returns the slot with the assignee set, replacing any earlier one.
    ///
    /// For building slots that arrive already assigned. Use `try_assign`
    /// to fill an open slot without overwriting.
    #[must_use]
    pub fn with_assignee(mut self, employee_id: &str) -> Self {
        self.assigned_employee_id = Some(employee_id.to_string());
        self
    }

    /// Returns the assigned employee's internal id.
    #[must_use]
    pub fn assigned_employee_id(&self) -> Option<&str> {
        self.assigned_employee_id.as_deref()
    }

    /// Returns whether the slot has an assignee.
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_employee_id.is_some()
    }

    /// Records the assignee.
    ///
    /// Returns `false` and leaves the slot untouched if it is already assigned.
    #[must_use]
    pub fn try_assign(&mut self, employee_id: &str) -> bool {
        if self.assigned_employee_id.is_some() {
            return false;
        }
        self.assigned_employee_id = Some(employee_id.to_string());
        true
    }

    /// Returns whether the shift ends on the following calendar day.
    #[must_use]
    pub fn crosses_midnight(&self) -> bool {
        self.end_time < self.start_time
    }

    /// Absolute start of the shift.
    #[must_use]
    pub const fn starts_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.start_time)
    }

    /// Absolute end of the shift, on the next day for overnight shifts.
    #[must_use]
    pub fn ends_at(&self) -> PrimitiveDateTime {
        let end: PrimitiveDateTime = PrimitiveDateTime::new(self.date, self.end_time);
        if self.crosses_midnight() {
            end.saturating_add(Duration::DAY)
        } else {
            end
        }
    }

    /// Length of the shift.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.ends_at() - self.starts_at()
    }

    /// Returns whether this is a night shift.
    ///
    /// A night shift crosses midnight, starts at or after 20:00, or ends at
    /// or before 06:00. An end of exactly 00:00 is the end of the start
    /// day, so such a shift is a night shift only if it starts late.
    #[must_use]
    pub fn is_night(&self) -> bool {
        if self.end_time == Time::MIDNIGHT {
            return self.start_time >= NIGHT_STARTS_AT;
        }
        self.crosses_midnight()
            || self.start_time >= NIGHT_STARTS_AT
            || self.end_time <= NIGHT_ENDS_BY
    }

    /// Returns whether the shift falls on a Saturday or Sunday.
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Returns whether the two slots' absolute intervals overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.starts_at() < other.ends_at() && other.starts_at() < self.ends_at()
    }
}

/// A slot an employee has marked as required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinnedShift {
    /// The date of the pinned shift.
    pub date: Date,
    /// The shift label.
    pub shift_name: String,
}

impl PinnedShift {
    /// Creates a new `PinnedShift`.
    #[must_use]
    pub fn new(date: Date, shift_name: &str) -> Self {
        Self {
            date,
            shift_name: shift_name.to_string(),
        }
    }

    /// Returns whether this pin targets the given slot.
    #[must_use]
    pub fn matches(&self, slot: &CoverageSlot) -> bool {
        self.date == slot.date && self.shift_name == slot.shift_name
    }
}

/// An employee as seen by the roster engine.
///
/// The engine never modifies employees.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Opaque identifier used for leave lookups and assignment.
    pub internal_id: String,
    /// Human-facing sortable code.
    pub employee_code: String,
    /// Shift names this employee prefers to work.
    pub preferred_shifts: Vec<String>,
    /// Shifts this employee must be given.
    pub pinned_shifts: Vec<PinnedShift>,
}

impl Employee {
    /// Creates a new `Employee` with no preferences or pins.
    ///
    /// # Arguments
    ///
    /// * `internal_id` - The opaque internal identifier
    /// * `employee_code` - The sortable employee code
    #[must_use]
    pub fn new(internal_id: &str, employee_code: &str) -> Self {
        Self {
            internal_id: internal_id.to_string(),
            employee_code: employee_code.to_string(),
            preferred_shifts: Vec::new(),
            pinned_shifts: Vec::new(),
        }
    }

    /// Adds a preferred shift name.
    #[must_use]
    pub fn with_preferred_shift(mut self, shift_name: &str) -> Self {
        self.preferred_shifts.push(shift_name.to_string());
        self
    }

    /// Adds a pinned shift.
    #[must_use]
    pub fn with_pinned_shift(mut self, date: Date, shift_name: &str) -> Self {
        self.pinned_shifts.push(PinnedShift::new(date, shift_name));
        self
    }

    /// Returns whether the employee prefers the named shift (case-insensitive).
    #[must_use]
    pub fn prefers(&self, shift_name: &str) -> bool {
        self.preferred_shifts
            .iter()
            .any(|preferred| preferred.eq_ignore_ascii_case(shift_name))
    }
}

/// A closed date interval during which an employee is unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveInterval {
    /// The employee's internal id.
    pub employee_internal_id: String,
    /// First day of leave (inclusive).
    pub start: Date,
    /// Last day of leave (inclusive).
    pub end: Date,
}

impl LeaveInterval {
    /// Creates a new `LeaveInterval`.
    #[must_use]
    pub fn new(employee_internal_id: &str, start: Date, end: Date) -> Self {
        Self {
            employee_internal_id: employee_internal_id.to_string(),
            start,
            end,
        }
    }

    /// Returns whether the interval covers the date.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Leave intervals keyed by employee internal id.
///
/// Each employee's intervals are kept ordered by start date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveMap {
    intervals: BTreeMap<String, Vec<LeaveInterval>>,
}

impl LeaveMap {
    /// Creates an empty `LeaveMap`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intervals: BTreeMap::new(),
        }
    }

    /// Builds a map from a list of intervals.
    ///
    /// # Errors
    ///
    /// Returns an error if any interval ends before it starts.
    pub fn from_intervals<I>(intervals: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = LeaveInterval>,
    {
        let mut map: Self = Self::new();
        for interval in intervals {
            map.insert(interval)?;
        }
        Ok(map)
    }

    /// Adds an interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval ends before it starts.
    pub fn insert(&mut self, interval: LeaveInterval) -> Result<(), DomainError> {
        validate_leave_interval(&interval)?;
        let entries: &mut Vec<LeaveInterval> = self
            .intervals
            .entry(interval.employee_internal_id.clone())
            .or_default();
        let position: usize = entries.partition_point(|existing| existing.start <= interval.start);
        entries.insert(position, interval);
        Ok(())
    }

    /// Returns the intervals recorded for an employee.
    #[must_use]
    pub fn intervals_for(&self, employee_id: &str) -> &[LeaveInterval] {
        self.intervals.get(employee_id).map_or(&[], Vec::as_slice)
    }

    /// Returns whether the employee is on leave on the date.
    #[must_use]
    pub fn is_on_leave(&self, employee_id: &str, date: Date) -> bool {
        self.intervals_for(employee_id)
            .iter()
            .take_while(|interval| interval.start <= date)
            .any(|interval| interval.contains(date))
    }

    /// Returns the total number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.values().map(Vec::len).sum()
    }

    /// Returns whether no intervals are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.values().all(Vec::is_empty)
    }
}
