//! Selecting the timetables that govern a given date.

use chrono::{Datelike, NaiveDate};

use crate::models::Timetable;

/// Return the timetables applying to `date`: validity window contains the
/// date and the weekday bit for the date is set.
///
/// The result is ordered by `valid_from` descending — most-recently-started
/// timetable first — which is the priority order consumed by the conflict
/// policy. Timetables sharing a `valid_from` are ordered by id descending,
/// so the later-created one wins ties. An empty result is a valid outcome:
/// no bells fire that day from timetables.
pub fn matching_timetables(date: NaiveDate, timetables: &[Timetable]) -> Vec<&Timetable> {
    let mut matched: Vec<&Timetable> = timetables
        .iter()
        .filter(|tt| tt.window_contains(date) && tt.weekdays.matches(date.weekday()))
        .collect();

    matched.sort_by(|a, b| {
        b.valid_from
            .cmp(&a.valid_from)
            .then_with(|| b.id.cmp(&a.id))
    });
    matched
}
