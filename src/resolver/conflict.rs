//! Conflict policy for same-time events across overlapping timetables.

use std::collections::HashMap;

use chrono::NaiveTime;

use crate::api::{SoundId, TimetableId};

/// An event candidate entering the merge, before sound resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateEvent {
    pub time: NaiveTime,
    pub event_name: String,
    pub sound_id: SoundId,
    pub source_timetable: TimetableId,
}

/// Merge per-timetable candidate lists into one time-ascending sequence.
///
/// `ranked` holds one list per matched timetable, highest priority first
/// (the matcher's ordering). The precedence rule:
///
/// - A time claimed by a higher-priority timetable drops same-time events
///   from every lower-priority timetable — a newer, narrower schedule
///   overrides an older standing one.
/// - Same-time events WITHIN one timetable all survive, in authoring order;
///   two distinct bells at the same minute is a legitimate authoring choice.
pub fn merge_candidates(ranked: Vec<Vec<CandidateEvent>>) -> Vec<CandidateEvent> {
    let mut claimed: HashMap<NaiveTime, TimetableId> = HashMap::new();
    let mut merged: Vec<CandidateEvent> = Vec::new();

    for candidates in ranked {
        for candidate in candidates {
            match claimed.get(&candidate.time) {
                None => {
                    claimed.insert(candidate.time, candidate.source_timetable);
                    merged.push(candidate);
                }
                Some(owner) if *owner == candidate.source_timetable => {
                    merged.push(candidate);
                }
                Some(_) => {
                    // Dropped: a higher-priority timetable owns this minute.
                }
            }
        }
    }

    // Stable: same-time events (necessarily from one timetable) keep their
    // authoring order.
    merged.sort_by_key(|candidate| candidate.time);
    merged
}
