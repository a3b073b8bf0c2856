// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use roster_domain::CoverageSlot;
use std::collections::{BTreeMap, BTreeSet};
use time::{Date, Duration, PrimitiveDateTime};

/// Running totals for one employee during a single roster run.
///
/// Streaks are derived from the recorded dates rather than kept as
/// counters, so shifts recorded out of calendar order (pins, pre-filled
/// slots) are accounted for correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeLedger {
    /// Dates with at least one shift starting on them.
    worked_dates: BTreeSet<Date>,
    /// Night shifts per start date.
    night_shifts: BTreeMap<Date, u32>,
    /// Absolute shift intervals, ordered by start.
    intervals: Vec<(PrimitiveDateTime, PrimitiveDateTime)>,
    /// Number of slots held.
    assigned_slots: usize,
    /// Cumulative minutes held.
    assigned_minutes: i64,
}

impl EmployeeLedger {
    /// Records a slot as held by this employee.
    pub fn record(&mut self, slot: &CoverageSlot) {
        self.worked_dates.insert(slot.date);
        if slot.is_night() {
            *self.night_shifts.entry(slot.date).or_insert(0) += 1;
        }

        let interval: (PrimitiveDateTime, PrimitiveDateTime) = (slot.starts_at(), slot.ends_at());
        let position: usize = self
            .intervals
            .partition_point(|existing| existing.0 <= interval.0);
        self.intervals.insert(position, interval);

        self.assigned_slots += 1;
        self.assigned_minutes += slot.duration().whole_minutes();
    }

    /// Number of slots held.
    #[must_use]
    pub const fn assigned_slots(&self) -> usize {
        self.assigned_slots
    }

    /// Cumulative minutes held.
    #[must_use]
    pub const fn assigned_minutes(&self) -> i64 {
        self.assigned_minutes
    }

    /// Returns whether a shift starts on the date.
    #[must_use]
    pub fn works_on(&self, date: Date) -> bool {
        self.worked_dates.contains(&date)
    }

    /// Returns whether any held shift overlaps the slot.
    #[must_use]
    pub fn overlaps(&self, slot: &CoverageSlot) -> bool {
        let (start, end) = (slot.starts_at(), slot.ends_at());
        self.intervals
            .iter()
            .any(|(held_start, held_end)| *held_start < end && start < *held_end)
    }

    /// Rest before the slot (since the nearest earlier shift ended) and
    /// after it (until the nearest later shift starts).
    ///
    /// Assumes the slot overlaps nothing held.
    #[must_use]
    pub fn rest_around(&self, slot: &CoverageSlot) -> (Option<Duration>, Option<Duration>) {
        let (start, end) = (slot.starts_at(), slot.ends_at());

        let before: Option<Duration> = self
            .intervals
            .iter()
            .filter(|(_, held_end)| *held_end <= start)
            .map(|(_, held_end)| start - *held_end)
            .min();
        let after: Option<Duration> = self
            .intervals
            .iter()
            .filter(|(held_start, _)| *held_start >= end)
            .map(|(held_start, _)| *held_start - end)
            .min();

        (before, after)
    }

    /// Length of the run of consecutive worked dates if `date` were worked.
    #[must_use]
    pub fn work_run_through(&self, date: Date) -> u32 {
        run_through(date, |day| self.worked_dates.contains(&day))
    }

    /// Length of the run of consecutive night dates if `date` had a night.
    #[must_use]
    pub fn night_run_through(&self, date: Date) -> u32 {
        run_through(date, |day| self.night_shifts.contains_key(&day))
    }

    /// Night shifts held in the ISO week containing `date`.
    #[must_use]
    pub fn nights_in_week_of(&self, date: Date) -> u32 {
        let week: (i32, u8) = iso_week(date);
        self.night_shifts
            .iter()
            .filter(|(day, _)| iso_week(**day) == week)
            .map(|(_, count)| *count)
            .sum()
    }
}

/// Counts `date` plus the adjacent days on either side for which `held` is true.
fn run_through(date: Date, held: impl Fn(Date) -> bool) -> u32 {
    let mut run: u32 = 1;

    let mut cursor: Option<Date> = date.previous_day();
    while let Some(day) = cursor.filter(|day| held(*day)) {
        run += 1;
        cursor = day.previous_day();
    }

    let mut cursor: Option<Date> = date.next_day();
    while let Some(day) = cursor.filter(|day| held(*day)) {
        run += 1;
        cursor = day.next_day();
    }

    run
}

fn iso_week(date: Date) -> (i32, u8) {
    let (year, week, _) = date.to_iso_week_date();
    (year, week)
}
