//! Template expansion relative to an anchor time.

use chrono::{NaiveTime, TimeDelta};

use super::error::{ResolveError, ResolveResult};
use crate::api::SoundId;
use crate::models::EventTemplate;

/// One concrete event produced by expanding a template item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandedEvent {
    pub time: NaiveTime,
    pub event_name: String,
    pub sound_id: SoundId,
    /// The item offset that produced this event, kept so the caller can
    /// identify the anchor (offset 0) of the group.
    pub offset_minutes: i32,
}

/// Expand a template at an anchor time into concrete events.
///
/// Each item yields `anchor + offset_minutes`. The result is ordered by time
/// ascending; items sharing an offset keep their authoring order. Expansion
/// is pure: the same template and anchor always produce an identical
/// sequence.
///
/// An offset pushing an event outside the anchor's calendar day fails with
/// [`ResolveError::TemplateExpansionOutOfRange`] — bells never wrap across
/// midnight.
pub fn expand(template: &EventTemplate, anchor: NaiveTime) -> ResolveResult<Vec<ExpandedEvent>> {
    let mut events = Vec::with_capacity(template.items.len());
    for item in &template.items {
        let delta = TimeDelta::minutes(item.offset_minutes as i64);
        let (time, wrapped) = anchor.overflowing_add_signed(delta);
        if wrapped != 0 {
            return Err(ResolveError::TemplateExpansionOutOfRange {
                anchor,
                offset_minutes: item.offset_minutes,
            });
        }
        events.push(ExpandedEvent {
            time,
            event_name: item.event_name.clone(),
            sound_id: item.sound_id,
            offset_minutes: item.offset_minutes,
        });
    }

    // Stable: equal times preserve item order.
    events.sort_by_key(|event| event.time);
    Ok(events)
}
