//! The schedule resolver: snapshot in, firing plan out.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::calendar::HolidayCalendar;
use super::conflict::{merge_candidates, CandidateEvent};
use super::error::ResolveResult;
use super::matcher::matching_timetables;
use crate::api::{SoundId, TimetableId};
use crate::models::{Holiday, Sound, Timetable};

/// Immutable, fully-loaded input to one resolution call.
///
/// The storage layer assembles this from a single consistent read; the
/// resolver never goes back to storage mid-computation, so it cannot observe
/// a timetable mid-edit. Timetables are already scoped to one owner.
#[derive(Debug, Clone, Default)]
pub struct ResolutionSnapshot {
    pub timetables: Vec<Timetable>,
    pub holidays: Vec<Holiday>,
    pub sounds: HashMap<SoundId, Sound>,
}

/// One bell firing instruction in the day's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiringInstruction {
    pub time: NaiveTime,
    pub event_name: String,
    pub sound_filename: String,
    pub source_timetable_id: TimetableId,
}

/// A non-fatal defect encountered while assembling the plan.
///
/// Warnings mark events the plan could not fully resolve; an event is never
/// silently omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// An event references a sound id with no corresponding record. The
    /// event cannot fire without a file, but the rest of the day's plan
    /// stands.
    MissingSound {
        sound_id: SoundId,
        event_name: String,
        event_time: NaiveTime,
        timetable_id: TimetableId,
    },
}

/// The resolved firing plan for one (user, date) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiringPlan {
    pub date: NaiveDate,
    /// Time-ascending, conflict-resolved instructions.
    pub instructions: Vec<FiringInstruction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PlanWarning>,
}

impl FiringPlan {
    fn empty(date: NaiveDate) -> Self {
        FiringPlan {
            date,
            instructions: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Resolve the firing plan for `date` from an immutable snapshot.
///
/// The algorithm, in order:
/// 1. A holiday suppresses every timetable-driven event for the date,
///    unconditionally — empty plan.
/// 2. Timetables are matched by validity window and weekday bit; no match,
///    empty plan.
/// 3. Each matched timetable contributes its events as concrete candidates
///    (template groups were expanded at write time).
/// 4. Candidates merge time-ascending under the conflict policy: same-time
///    ties across timetables go to the most-recently-started one.
/// 5. Sound ids resolve to filenames; a dangling reference becomes a
///    [`PlanWarning::MissingSound`] instead of an instruction.
///
/// Pure and deterministic: identical snapshot and date always produce an
/// identical plan.
pub fn resolve(snapshot: &ResolutionSnapshot, date: NaiveDate) -> ResolveResult<FiringPlan> {
    let calendar = HolidayCalendar::build(&snapshot.holidays)?;
    if calendar.is_holiday(date) {
        return Ok(FiringPlan::empty(date));
    }

    let matched = matching_timetables(date, &snapshot.timetables);
    if matched.is_empty() {
        return Ok(FiringPlan::empty(date));
    }

    let mut ranked: Vec<Vec<CandidateEvent>> = Vec::with_capacity(matched.len());
    for timetable in &matched {
        check_preconditions(timetable, date)?;
        ranked.push(
            timetable
                .events
                .iter()
                .map(|event| CandidateEvent {
                    time: event.event_time,
                    event_name: event.event_name.clone(),
                    sound_id: event.sound_id,
                    source_timetable: timetable.id,
                })
                .collect(),
        );
    }

    let mut plan = FiringPlan::empty(date);
    for candidate in merge_candidates(ranked) {
        match snapshot.sounds.get(&candidate.sound_id) {
            Some(sound) => plan.instructions.push(FiringInstruction {
                time: candidate.time,
                event_name: candidate.event_name,
                sound_filename: sound.filename.clone(),
                source_timetable_id: candidate.source_timetable,
            }),
            None => plan.warnings.push(PlanWarning::MissingSound {
                sound_id: candidate.sound_id,
                event_name: candidate.event_name,
                event_time: candidate.time,
                timetable_id: candidate.source_timetable,
            }),
        }
    }

    Ok(plan)
}

/// Fail fast if a matched timetable violates an invariant that validation
/// should have enforced.
fn check_preconditions(timetable: &Timetable, date: NaiveDate) -> ResolveResult<()> {
    if let Some(until) = timetable.valid_until {
        if until < timetable.valid_from {
            return Err(super::ResolveError::precondition(format!(
                "timetable {} ({}) has an inverted validity window {}..{} while resolving {}",
                timetable.id, timetable.name, timetable.valid_from, until, date
            )));
        }
    }
    for event in &timetable.events {
        if event.timetable_id != timetable.id {
            return Err(super::ResolveError::precondition(format!(
                "event {} claims timetable {} but is owned by timetable {} while resolving {}",
                event.id, event.timetable_id, timetable.id, date
            )));
        }
    }
    Ok(())
}
