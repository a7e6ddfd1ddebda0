//! Holiday calendar lookups.

use chrono::{Days, NaiveDate};

use super::error::{ResolveError, ResolveResult};
use crate::models::Holiday;

/// Pre-sorted holiday intervals supporting O(log n) date lookups.
///
/// Built once per resolution call. Overlapping or adjacent input intervals
/// are merged into a disjoint union, so redundant holiday records are
/// harmless.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    /// Disjoint closed intervals, sorted by start date.
    intervals: Vec<(NaiveDate, NaiveDate)>,
}

impl HolidayCalendar {
    /// Build a calendar from holiday records.
    ///
    /// An inverted interval fails with `PreconditionViolation`: holidays are
    /// validated at construction, so one arriving here inverted means the
    /// snapshot is corrupt.
    pub fn build(holidays: &[Holiday]) -> ResolveResult<Self> {
        let mut intervals: Vec<(NaiveDate, NaiveDate)> = Vec::with_capacity(holidays.len());
        for holiday in holidays {
            if holiday.valid_until < holiday.valid_from {
                return Err(ResolveError::precondition(format!(
                    "holiday {} ({}) has an inverted interval {}..{}",
                    holiday.id, holiday.name, holiday.valid_from, holiday.valid_until
                )));
            }
            intervals.push((holiday.valid_from, holiday.valid_until));
        }
        intervals.sort();

        // Merge overlapping and adjacent closed intervals into a disjoint set.
        let mut merged: Vec<(NaiveDate, NaiveDate)> = Vec::with_capacity(intervals.len());
        for (start, end) in intervals {
            match merged.last_mut() {
                Some((_, last_end)) if start <= next_day(*last_end) => {
                    if end > *last_end {
                        *last_end = end;
                    }
                }
                _ => merged.push((start, end)),
            }
        }

        Ok(HolidayCalendar { intervals: merged })
    }

    /// Whether `date` falls inside any holiday interval.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        // Index of the first interval starting after `date`; only the one
        // before it can contain the date since intervals are disjoint.
        let idx = self.intervals.partition_point(|(start, _)| *start <= date);
        idx > 0 && date <= self.intervals[idx - 1].1
    }

    /// Number of disjoint intervals after merging.
    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    // NaiveDate::MAX has no successor; saturate instead of panicking.
    date.checked_add_days(Days::new(1)).unwrap_or(date)
}
