//! Data Transfer Objects for the HTTP API.
//!
//! Entity types and drafts already derive Serialize/Deserialize and are
//! used directly as response and request bodies; this module only adds the
//! request shapes that have no domain counterpart.

use serde::{Deserialize, Serialize};

// Re-export the domain types that double as API payloads.
pub use crate::models::{
    EventDraft, EventTemplate, Holiday, HolidayDraft, Sound, TemplateDraft, Timetable,
    TimetableDraft, TimetableEvent, User,
};
pub use crate::resolver::{FiringInstruction, FiringPlan, PlanWarning};

/// Request body for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// Unique login name
    pub username: String,
    /// Interface language; defaults to Estonian
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    crate::models::DEFAULT_LANGUAGE.to_string()
}

/// Request body for creating a sound record.
///
/// The audio blob itself is stored outside this service; the request only
/// registers the name and the filename the blob was stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSoundRequest {
    pub name: String,
    pub filename: String,
}

/// Request body for renaming a sound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameSoundRequest {
    pub name: String,
}

/// Request body for applying a template to a timetable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyTemplateRequest {
    pub template_id: i64,
    /// Anchor time the template offsets are measured from
    pub anchor_time: chrono::NaiveTime,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}

/// Response for deletions, mirroring the frontend's expectations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
