//! Bell schedule resolution engine.
//!
//! Given an immutable snapshot of one user's timetables, the system-wide
//! holidays and the sound registry, this module computes the firing plan for
//! a single date: the ordered, deduplicated sequence of (time, sound)
//! instructions for that day.
//!
//! Resolution is a pure projection — it reads the snapshot, writes nothing
//! back, and is re-run on demand for every date. The pieces compose one way:
//!
//! ```text
//! snapshot ──▶ HolidayCalendar ──▶ (holiday? empty plan)
//!         └──▶ matching_timetables ──▶ merge_candidates ──▶ FiringPlan
//! ```
//!
//! Template expansion ([`expander`]) runs at write time when a template is
//! applied to a timetable; by the time resolution sees a timetable its
//! template groups are already concrete events.

pub mod calendar;
pub mod conflict;
pub mod error;
pub mod expander;
pub mod matcher;
pub mod resolve;

pub use calendar::HolidayCalendar;
pub use conflict::{merge_candidates, CandidateEvent};
pub use error::ResolveError;
pub use expander::{expand, ExpandedEvent};
pub use matcher::matching_timetables;
pub use resolve::{resolve, FiringInstruction, FiringPlan, PlanWarning, ResolutionSnapshot};


#[cfg(test)]
#[path = "expander_tests.rs"]
mod expander_tests;
