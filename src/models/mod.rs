//! Validated domain entities.
//!
//! Every entity in this module goes through a validating constructor: a value
//! that exists is a value that satisfies its invariants. The resolution
//! engine in [`crate::resolver`] relies on this and treats a violated
//! invariant as a precondition failure rather than attempting recovery.

pub mod error;
pub mod holiday;
pub mod sound;
pub mod template;
pub mod timetable;
pub mod user;
pub mod weekday;

pub use error::ValidationError;
pub use holiday::{Holiday, HolidayDraft};
pub use sound::Sound;
pub use template::{EventTemplate, EventTemplateItem, TemplateDraft, TemplateItemDraft};
pub use timetable::{EventDraft, Timetable, TimetableDraft, TimetableEvent};
pub use user::{User, DEFAULT_LANGUAGE};
pub use weekday::WeekdayMask;

#[cfg(test)]
#[path = "weekday_tests.rs"]
mod weekday_tests;

#[cfg(test)]
#[path = "timetable_tests.rs"]
mod timetable_tests;

#[cfg(test)]
#[path = "template_tests.rs"]
mod template_tests;

/// Shared length check for user-visible names.
///
/// Bounds are inclusive and counted in characters, not bytes.
pub(crate) fn validate_name(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ValidationError::NameLength {
            field,
            len,
            min,
            max,
        });
    }
    Ok(())
}
