//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;

use super::dto::{
    ApplyTemplateRequest, CreateSoundRequest, CreateUserRequest, DeleteResponse, HealthResponse,
    RenameSoundRequest,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{EventId, HolidayId, SoundId, TemplateId, TimetableId, UserId};
use crate::db::services as db_services;
use crate::models::{
    EventDraft, EventTemplate, Holiday, HolidayDraft, Sound, TemplateDraft, Timetable,
    TimetableDraft, TimetableEvent, User,
};
use crate::resolver::FiringPlan;
use crate::services::resolution;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Users
// =============================================================================

/// GET /v1/users
pub async fn list_users(State(state): State<AppState>) -> HandlerResult<Vec<User>> {
    let users = db_services::list_users(state.repository.as_ref()).await?;
    Ok(Json(users))
}

/// POST /v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> HandlerResult<User> {
    let user = db_services::create_user(
        state.repository.as_ref(),
        &request.username,
        &request.language,
    )
    .await?;
    Ok(Json(user))
}

/// GET /v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<User> {
    let user = db_services::get_user(state.repository.as_ref(), UserId::new(user_id)).await?;
    Ok(Json(user))
}

// =============================================================================
// Timetables
// =============================================================================

/// GET /v1/users/{user_id}/timetables
pub async fn list_timetables(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> HandlerResult<Vec<Timetable>> {
    let timetables =
        db_services::list_timetables(state.repository.as_ref(), UserId::new(user_id)).await?;
    Ok(Json(timetables))
}

/// POST /v1/users/{user_id}/timetables
pub async fn create_timetable(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(draft): Json<TimetableDraft>,
) -> HandlerResult<Timetable> {
    let timetable =
        db_services::create_timetable(state.repository.as_ref(), UserId::new(user_id), &draft)
            .await?;
    Ok(Json(timetable))
}

/// GET /v1/users/{user_id}/timetables/{timetable_id}
pub async fn get_timetable(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
) -> HandlerResult<Timetable> {
    let timetable = db_services::get_timetable(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
    )
    .await?;
    Ok(Json(timetable))
}

/// PUT /v1/users/{user_id}/timetables/{timetable_id}
pub async fn update_timetable(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
    Json(draft): Json<TimetableDraft>,
) -> HandlerResult<Timetable> {
    let timetable = db_services::update_timetable(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
        &draft,
    )
    .await?;
    Ok(Json(timetable))
}

/// DELETE /v1/users/{user_id}/timetables/{timetable_id}
pub async fn delete_timetable(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_timetable(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
    )
    .await?;
    Ok(Json(DeleteResponse {
        message: "Timetable deleted".to_string(),
    }))
}

// =============================================================================
// Timetable Events
// =============================================================================

/// GET /v1/users/{user_id}/timetables/{timetable_id}/events
pub async fn list_events(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
) -> HandlerResult<Vec<TimetableEvent>> {
    let timetable = db_services::get_timetable(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
    )
    .await?;
    Ok(Json(timetable.events))
}

/// POST /v1/users/{user_id}/timetables/{timetable_id}/events
pub async fn create_event(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
    Json(draft): Json<EventDraft>,
) -> HandlerResult<TimetableEvent> {
    let event = db_services::create_event(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
        &draft,
    )
    .await?;
    Ok(Json(event))
}

/// PUT /v1/users/{user_id}/timetables/{timetable_id}/events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    Path((user_id, timetable_id, event_id)): Path<(i64, i64, i64)>,
    Json(draft): Json<EventDraft>,
) -> HandlerResult<TimetableEvent> {
    let event = db_services::update_event(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
        EventId::new(event_id),
        &draft,
    )
    .await?;
    Ok(Json(event))
}

/// DELETE /v1/users/{user_id}/timetables/{timetable_id}/events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path((user_id, timetable_id, event_id)): Path<(i64, i64, i64)>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_event(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
        EventId::new(event_id),
    )
    .await?;
    Ok(Json(DeleteResponse {
        message: "Event deleted".to_string(),
    }))
}

/// POST /v1/users/{user_id}/timetables/{timetable_id}/apply-template
///
/// Expand a template at the given anchor time and store the resulting
/// events, replacing any previous application of the same template.
pub async fn apply_template(
    State(state): State<AppState>,
    Path((user_id, timetable_id)): Path<(i64, i64)>,
    Json(request): Json<ApplyTemplateRequest>,
) -> HandlerResult<Vec<TimetableEvent>> {
    let events = db_services::apply_template(
        state.repository.as_ref(),
        UserId::new(user_id),
        TimetableId::new(timetable_id),
        TemplateId::new(request.template_id),
        request.anchor_time,
    )
    .await?;
    Ok(Json(events))
}

// =============================================================================
// Schedule Resolution
// =============================================================================

/// GET /v1/users/{user_id}/firing-plan/{date}
///
/// Resolve the bell firing plan for one user and date.
pub async fn get_firing_plan(
    State(state): State<AppState>,
    Path((user_id, date)): Path<(i64, NaiveDate)>,
) -> HandlerResult<FiringPlan> {
    let plan =
        resolution::resolve_schedule(state.repository.as_ref(), UserId::new(user_id), date)
            .await?;
    Ok(Json(plan))
}

// =============================================================================
// Templates
// =============================================================================

/// GET /v1/templates
pub async fn list_templates(State(state): State<AppState>) -> HandlerResult<Vec<EventTemplate>> {
    let templates = db_services::list_templates(state.repository.as_ref()).await?;
    Ok(Json(templates))
}

/// POST /v1/templates
pub async fn create_template(
    State(state): State<AppState>,
    Json(draft): Json<TemplateDraft>,
) -> HandlerResult<EventTemplate> {
    let template = db_services::create_template(state.repository.as_ref(), &draft).await?;
    Ok(Json(template))
}

/// GET /v1/templates/{template_id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<i64>,
) -> HandlerResult<EventTemplate> {
    let template =
        db_services::get_template(state.repository.as_ref(), TemplateId::new(template_id))
            .await?;
    Ok(Json(template))
}

/// PUT /v1/templates/{template_id}
pub async fn update_template(
    State(state): State<AppState>,
    Path(template_id): Path<i64>,
    Json(draft): Json<TemplateDraft>,
) -> HandlerResult<EventTemplate> {
    let template = db_services::update_template(
        state.repository.as_ref(),
        TemplateId::new(template_id),
        &draft,
    )
    .await?;
    Ok(Json(template))
}

/// DELETE /v1/templates/{template_id}
pub async fn delete_template(
    State(state): State<AppState>,
    Path(template_id): Path<i64>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_template(state.repository.as_ref(), TemplateId::new(template_id)).await?;
    Ok(Json(DeleteResponse {
        message: "Template deleted".to_string(),
    }))
}

// =============================================================================
// Holidays
// =============================================================================

/// GET /v1/holidays
pub async fn list_holidays(State(state): State<AppState>) -> HandlerResult<Vec<Holiday>> {
    let holidays = db_services::list_holidays(state.repository.as_ref()).await?;
    Ok(Json(holidays))
}

/// POST /v1/holidays
pub async fn create_holiday(
    State(state): State<AppState>,
    Json(draft): Json<HolidayDraft>,
) -> HandlerResult<Holiday> {
    let holiday = db_services::create_holiday(state.repository.as_ref(), &draft).await?;
    Ok(Json(holiday))
}

/// PUT /v1/holidays/{holiday_id}
pub async fn update_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<i64>,
    Json(draft): Json<HolidayDraft>,
) -> HandlerResult<Holiday> {
    let holiday = db_services::update_holiday(
        state.repository.as_ref(),
        HolidayId::new(holiday_id),
        &draft,
    )
    .await?;
    Ok(Json(holiday))
}

/// DELETE /v1/holidays/{holiday_id}
pub async fn delete_holiday(
    State(state): State<AppState>,
    Path(holiday_id): Path<i64>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_holiday(state.repository.as_ref(), HolidayId::new(holiday_id)).await?;
    Ok(Json(DeleteResponse {
        message: "Holiday deleted".to_string(),
    }))
}

// =============================================================================
// Sounds
// =============================================================================

/// GET /v1/sounds
pub async fn list_sounds(State(state): State<AppState>) -> HandlerResult<Vec<Sound>> {
    let sounds = db_services::list_sounds(state.repository.as_ref()).await?;
    Ok(Json(sounds))
}

/// POST /v1/sounds
pub async fn create_sound(
    State(state): State<AppState>,
    Json(request): Json<CreateSoundRequest>,
) -> HandlerResult<Sound> {
    let sound =
        db_services::create_sound(state.repository.as_ref(), &request.name, &request.filename)
            .await?;
    Ok(Json(sound))
}

/// GET /v1/sounds/{sound_id}
pub async fn get_sound(
    State(state): State<AppState>,
    Path(sound_id): Path<i64>,
) -> HandlerResult<Sound> {
    let sound = db_services::get_sound(state.repository.as_ref(), SoundId::new(sound_id)).await?;
    Ok(Json(sound))
}

/// PUT /v1/sounds/{sound_id}
pub async fn rename_sound(
    State(state): State<AppState>,
    Path(sound_id): Path<i64>,
    Json(request): Json<RenameSoundRequest>,
) -> HandlerResult<Sound> {
    let sound = db_services::rename_sound(
        state.repository.as_ref(),
        SoundId::new(sound_id),
        &request.name,
    )
    .await?;
    Ok(Json(sound))
}

/// DELETE /v1/sounds/{sound_id}
pub async fn delete_sound(
    State(state): State<AppState>,
    Path(sound_id): Path<i64>,
) -> HandlerResult<DeleteResponse> {
    db_services::delete_sound(state.repository.as_ref(), SoundId::new(sound_id)).await?;
    Ok(Json(DeleteResponse {
        message: "Sound deleted".to_string(),
    }))
}
