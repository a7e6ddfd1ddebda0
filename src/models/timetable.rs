//! Timetables and their bell events.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{validate_name, ValidationError, WeekdayMask};
use crate::api::{EventId, SoundId, TemplateInstanceId, TimetableId, UserId};

/// A named per-user bell schedule with a validity window and weekday mask.
///
/// Owns its events exclusively: deleting a timetable deletes every event it
/// contains (a contract of the storage layer, see
/// [`crate::db::repository::TimetableRepository::delete_timetable`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    pub id: TimetableId,
    pub user_id: UserId,
    pub name: String,
    /// First date (inclusive) on which the timetable may apply.
    pub valid_from: NaiveDate,
    /// Last date (inclusive); `None` means open-ended.
    pub valid_until: Option<NaiveDate>,
    pub weekdays: WeekdayMask,
    /// Events in authoring order.
    pub events: Vec<TimetableEvent>,
}

impl Timetable {
    /// Construct a validated timetable with no events.
    pub fn new(
        id: TimetableId,
        user_id: UserId,
        name: impl Into<String>,
        valid_from: NaiveDate,
        valid_until: Option<NaiveDate>,
        weekdays: WeekdayMask,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name("timetable name", &name, 2, 100)?;
        check_window(valid_from, valid_until)?;
        Ok(Timetable {
            id,
            user_id,
            name,
            valid_from,
            valid_until,
            weekdays,
            events: Vec::new(),
        })
    }

    /// Whether `date` falls inside the validity window (both bounds inclusive).
    pub fn window_contains(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && self.valid_until.map_or(true, |until| date <= until)
    }
}

/// One concrete bell event inside a timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableEvent {
    pub id: EventId,
    pub timetable_id: TimetableId,
    pub event_name: String,
    /// Time of day; the date comes from resolution.
    pub event_time: NaiveTime,
    pub sound_id: SoundId,
    /// Set when the event was spawned by a template application; all events
    /// sharing an instance id belong to the same timetable.
    pub template_instance_id: Option<TemplateInstanceId>,
    /// Marks the anchor event of a template instance group.
    pub is_template_base: bool,
}

impl TimetableEvent {
    pub fn new(
        id: EventId,
        timetable_id: TimetableId,
        event_name: impl Into<String>,
        event_time: NaiveTime,
        sound_id: SoundId,
        template_instance_id: Option<TemplateInstanceId>,
        is_template_base: bool,
    ) -> Result<Self, ValidationError> {
        let event_name = event_name.into();
        validate_name("event name", &event_name, 2, 100)?;
        Ok(TimetableEvent {
            id,
            timetable_id,
            event_name,
            event_time,
            sound_id,
            template_instance_id,
            is_template_base,
        })
    }
}

/// Mutable fields of a timetable, used for both creation and update.
///
/// Identity and ownership (`id`, `user_id`) are deliberately absent: an
/// update can never move a timetable to another user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableDraft {
    pub name: String,
    pub valid_from: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub weekdays: WeekdayMask,
}

impl TimetableDraft {
    /// Check the draft against the timetable invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("timetable name", &self.name, 2, 100)?;
        check_window(self.valid_from, self.valid_until)
    }
}

/// Mutable fields of a timetable event, used for both creation and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub event_name: String,
    pub event_time: NaiveTime,
    pub sound_id: SoundId,
    #[serde(default)]
    pub template_instance_id: Option<TemplateInstanceId>,
    #[serde(default)]
    pub is_template_base: bool,
}

impl EventDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("event name", &self.event_name, 2, 100)
    }
}

fn check_window(
    valid_from: NaiveDate,
    valid_until: Option<NaiveDate>,
) -> Result<(), ValidationError> {
    if let Some(until) = valid_until {
        if until < valid_from {
            return Err(ValidationError::InvalidWindow {
                valid_from,
                valid_until: until,
            });
        }
    }
    Ok(())
}
