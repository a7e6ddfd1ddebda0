//! Event templates: named sets of offsets expanded relative to an anchor.

use serde::{Deserialize, Serialize};

use super::{validate_name, ValidationError};
use crate::api::{SoundId, TemplateId, TemplateItemId};

/// A reusable, system-wide set of bell events described as minute offsets
/// from an anchor time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplate {
    pub id: TemplateId,
    pub name: String,
    pub description: Option<String>,
    /// Items in authoring order; expansion orders by resulting time.
    pub items: Vec<EventTemplateItem>,
}

impl EventTemplate {
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        description: Option<String>,
        items: Vec<EventTemplateItem>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name("template name", &name, 2, 100)?;
        if let Some(ref description) = description {
            validate_name("template description", description, 0, 500)?;
        }
        Ok(EventTemplate {
            id,
            name,
            description,
            items,
        })
    }
}

/// One item of a template: a signed offset from the anchor, a name and a
/// sound. Multiple items may share an offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTemplateItem {
    pub id: TemplateItemId,
    pub template_id: TemplateId,
    /// Minutes relative to the anchor, in -120..=120.
    pub offset_minutes: i32,
    pub event_name: String,
    pub sound_id: SoundId,
}

impl EventTemplateItem {
    pub fn new(
        id: TemplateItemId,
        template_id: TemplateId,
        offset_minutes: i32,
        event_name: impl Into<String>,
        sound_id: SoundId,
    ) -> Result<Self, ValidationError> {
        check_offset(offset_minutes)?;
        let event_name = event_name.into();
        validate_name("event name", &event_name, 2, 100)?;
        Ok(EventTemplateItem {
            id,
            template_id,
            offset_minutes,
            event_name,
            sound_id,
        })
    }
}

/// Mutable fields of a template, used for both creation and update.
///
/// An update replaces the whole item list, matching the write semantics of
/// the storage layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub items: Vec<TemplateItemDraft>,
}

impl TemplateDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name("template name", &self.name, 2, 100)?;
        if let Some(ref description) = self.description {
            validate_name("template description", description, 0, 500)?;
        }
        for item in &self.items {
            item.validate()?;
        }
        Ok(())
    }
}

/// Mutable fields of a template item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateItemDraft {
    pub offset_minutes: i32,
    pub event_name: String,
    pub sound_id: SoundId,
}

impl TemplateItemDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_offset(self.offset_minutes)?;
        validate_name("event name", &self.event_name, 2, 100)
    }
}

fn check_offset(offset_minutes: i32) -> Result<(), ValidationError> {
    if !(-120..=120).contains(&offset_minutes) {
        return Err(ValidationError::OffsetOutOfRange { offset_minutes });
    }
    Ok(())
}
