//! High-level storage operations.
//!
//! These functions sit on top of the repository traits and add the business
//! rules the raw CRUD layer does not know about: name uniqueness, owner
//! existence, and template application. Handlers and bindings should call
//! these rather than the traits directly.

use chrono::NaiveTime;

use super::repository::{ErrorContext, FullRepository, RepositoryError, RepositoryResult};
use crate::api::{
    EventId, HolidayId, SoundId, TemplateId, TemplateInstanceId, TimetableId, UserId,
};
use crate::models::{
    EventDraft, EventTemplate, Holiday, HolidayDraft, Sound, TemplateDraft, Timetable,
    TimetableDraft, TimetableEvent, User,
};
use crate::resolver::expander;

/// Check if the storage backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Users ====================

/// Create a user, enforcing username uniqueness.
pub async fn create_user(
    repo: &dyn FullRepository,
    username: &str,
    language: &str,
) -> RepositoryResult<User> {
    if repo.find_user_by_username(username).await?.is_some() {
        return Err(RepositoryError::validation_with_context(
            "A user with this username already exists",
            ErrorContext::new("create_user")
                .with_entity("user")
                .with_details(format!("username={}", username)),
        ));
    }
    repo.create_user(username, language).await
}

pub async fn get_user(repo: &dyn FullRepository, user_id: UserId) -> RepositoryResult<User> {
    repo.get_user(user_id).await
}

pub async fn list_users(repo: &dyn FullRepository) -> RepositoryResult<Vec<User>> {
    repo.list_users().await
}

// ==================== Timetables ====================

/// Create a timetable, enforcing per-owner name uniqueness.
pub async fn create_timetable(
    repo: &dyn FullRepository,
    owner: UserId,
    draft: &TimetableDraft,
) -> RepositoryResult<Timetable> {
    repo.get_user(owner).await?;
    if repo.find_timetable_by_name(owner, &draft.name).await?.is_some() {
        return Err(duplicate_name("create_timetable", "timetable", &draft.name));
    }
    repo.create_timetable(owner, draft).await
}

pub async fn get_timetable(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
) -> RepositoryResult<Timetable> {
    repo.get_timetable(owner, timetable_id).await
}

pub async fn list_timetables(
    repo: &dyn FullRepository,
    owner: UserId,
) -> RepositoryResult<Vec<Timetable>> {
    repo.list_timetables(owner).await
}

/// Update a timetable's mutable fields, enforcing per-owner name uniqueness
/// against every timetable but the one being updated.
pub async fn update_timetable(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
    draft: &TimetableDraft,
) -> RepositoryResult<Timetable> {
    if let Some(existing) = repo.find_timetable_by_name(owner, &draft.name).await? {
        if existing.id != timetable_id {
            return Err(duplicate_name("update_timetable", "timetable", &draft.name));
        }
    }
    repo.update_timetable(owner, timetable_id, draft).await
}

/// Delete a timetable and, per the repository contract, all of its events.
pub async fn delete_timetable(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
) -> RepositoryResult<()> {
    log::debug!("deleting timetable {} for user {}", timetable_id, owner);
    repo.delete_timetable(owner, timetable_id).await
}

// ==================== Timetable Events ====================

pub async fn create_event(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
    draft: &EventDraft,
) -> RepositoryResult<TimetableEvent> {
    repo.insert_event(owner, timetable_id, draft).await
}

pub async fn update_event(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
    event_id: EventId,
    draft: &EventDraft,
) -> RepositoryResult<TimetableEvent> {
    repo.update_event(owner, timetable_id, event_id, draft).await
}

pub async fn delete_event(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
    event_id: EventId,
) -> RepositoryResult<()> {
    repo.delete_event(owner, timetable_id, event_id).await
}

/// Apply a template to a timetable at an anchor time.
///
/// The template's items are expanded into concrete events relative to
/// `anchor` and stored under a template instance id derived from the
/// template. Any events from a previous application of the same template to
/// this timetable are replaced, not merged, so re-applying at the same
/// anchor is idempotent. The zero-offset event (or the earliest, if no item
/// sits at offset 0) is flagged as the instance's base.
///
/// Expansion happens here, at write time: resolution later consumes the
/// stored concrete events and never re-expands.
pub async fn apply_template(
    repo: &dyn FullRepository,
    owner: UserId,
    timetable_id: TimetableId,
    template_id: TemplateId,
    anchor: NaiveTime,
) -> RepositoryResult<Vec<TimetableEvent>> {
    let template = repo.get_template(template_id).await?;
    let expanded = expander::expand(&template, anchor).map_err(|e| {
        RepositoryError::validation_with_context(
            e.to_string(),
            ErrorContext::new("apply_template")
                .with_entity("event_template")
                .with_entity_id(template_id),
        )
    })?;

    let instance = TemplateInstanceId::new(template_id.value());
    let replaced = repo
        .delete_template_instance(owner, timetable_id, instance)
        .await?;
    if replaced > 0 {
        log::debug!(
            "replacing {} events of template instance {} in timetable {}",
            replaced,
            instance,
            timetable_id
        );
    }

    let base_index = expanded
        .iter()
        .position(|event| event.offset_minutes == 0)
        .unwrap_or(0);
    let drafts: Vec<EventDraft> = expanded
        .iter()
        .enumerate()
        .map(|(index, event)| EventDraft {
            event_name: event.event_name.clone(),
            event_time: event.time,
            sound_id: event.sound_id,
            template_instance_id: Some(instance),
            is_template_base: index == base_index,
        })
        .collect();

    repo.insert_events(owner, timetable_id, &drafts).await
}

// ==================== Templates ====================

/// Create a template, enforcing name uniqueness.
pub async fn create_template(
    repo: &dyn FullRepository,
    draft: &TemplateDraft,
) -> RepositoryResult<EventTemplate> {
    if repo.find_template_by_name(&draft.name).await?.is_some() {
        return Err(duplicate_name("create_template", "event_template", &draft.name));
    }
    repo.create_template(draft).await
}

pub async fn get_template(
    repo: &dyn FullRepository,
    template_id: TemplateId,
) -> RepositoryResult<EventTemplate> {
    repo.get_template(template_id).await
}

pub async fn list_templates(repo: &dyn FullRepository) -> RepositoryResult<Vec<EventTemplate>> {
    repo.list_templates().await
}

/// Update a template, enforcing name uniqueness against every template but
/// the one being updated. The item list is replaced wholesale.
pub async fn update_template(
    repo: &dyn FullRepository,
    template_id: TemplateId,
    draft: &TemplateDraft,
) -> RepositoryResult<EventTemplate> {
    if let Some(existing) = repo.find_template_by_name(&draft.name).await? {
        if existing.id != template_id {
            return Err(duplicate_name("update_template", "event_template", &draft.name));
        }
    }
    repo.update_template(template_id, draft).await
}

pub async fn delete_template(
    repo: &dyn FullRepository,
    template_id: TemplateId,
) -> RepositoryResult<()> {
    repo.delete_template(template_id).await
}

// ==================== Holidays ====================

pub async fn create_holiday(
    repo: &dyn FullRepository,
    draft: &HolidayDraft,
) -> RepositoryResult<Holiday> {
    repo.create_holiday(draft).await
}

pub async fn list_holidays(repo: &dyn FullRepository) -> RepositoryResult<Vec<Holiday>> {
    repo.list_holidays().await
}

pub async fn update_holiday(
    repo: &dyn FullRepository,
    holiday_id: HolidayId,
    draft: &HolidayDraft,
) -> RepositoryResult<Holiday> {
    repo.update_holiday(holiday_id, draft).await
}

pub async fn delete_holiday(
    repo: &dyn FullRepository,
    holiday_id: HolidayId,
) -> RepositoryResult<()> {
    repo.delete_holiday(holiday_id).await
}

// ==================== Sounds ====================

/// Create a sound record, enforcing name uniqueness.
pub async fn create_sound(
    repo: &dyn FullRepository,
    name: &str,
    filename: &str,
) -> RepositoryResult<Sound> {
    if repo.find_sound_by_name(name).await?.is_some() {
        return Err(duplicate_name("create_sound", "sound", name));
    }
    repo.create_sound(name, filename).await
}

pub async fn get_sound(repo: &dyn FullRepository, sound_id: SoundId) -> RepositoryResult<Sound> {
    repo.get_sound(sound_id).await
}

pub async fn list_sounds(repo: &dyn FullRepository) -> RepositoryResult<Vec<Sound>> {
    repo.list_sounds().await
}

/// Rename a sound, enforcing name uniqueness against every sound but the
/// one being renamed.
pub async fn rename_sound(
    repo: &dyn FullRepository,
    sound_id: SoundId,
    name: &str,
) -> RepositoryResult<Sound> {
    if let Some(existing) = repo.find_sound_by_name(name).await? {
        if existing.id != sound_id {
            return Err(duplicate_name("rename_sound", "sound", name));
        }
    }
    repo.rename_sound(sound_id, name).await
}

pub async fn delete_sound(repo: &dyn FullRepository, sound_id: SoundId) -> RepositoryResult<()> {
    repo.delete_sound(sound_id).await
}

fn duplicate_name(operation: &str, entity: &str, name: &str) -> RepositoryError {
    RepositoryError::validation_with_context(
        format!("A {} with this name already exists", entity.replace('_', " ")),
        ErrorContext::new(operation)
            .with_entity(entity)
            .with_details(format!("name={}", name)),
    )
}
