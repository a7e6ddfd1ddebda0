//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures, providing fast, deterministic, and
//! isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{
    EventId, HolidayId, SoundId, TemplateId, TemplateInstanceId, TemplateItemId, TimetableId,
    UserId,
};
use crate::db::repository::{
    ErrorContext, HolidayRepository, RepositoryError, RepositoryResult, SoundRepository,
    TemplateRepository, TimetableRepository, UserRepository,
};
use crate::models::{
    EventDraft, EventTemplate, EventTemplateItem, Holiday, HolidayDraft, Sound, Timetable,
    TimetableDraft, TimetableEvent, User,
};

/// In-memory local repository.
///
/// All data lives behind one `RwLock`, so every operation sees a consistent
/// state and a resolution snapshot assembled under a single read cannot
/// observe a timetable mid-edit.
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    users: HashMap<UserId, User>,
    timetables: HashMap<TimetableId, Timetable>,
    templates: HashMap<TemplateId, EventTemplate>,
    holidays: HashMap<HolidayId, Holiday>,
    sounds: HashMap<SoundId, Sound>,

    // ID counters
    next_user_id: i64,
    next_timetable_id: i64,
    next_event_id: i64,
    next_template_id: i64,
    next_template_item_id: i64,
    next_holiday_id: i64,
    next_sound_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            timetables: HashMap::new(),
            templates: HashMap::new(),
            holidays: HashMap::new(),
            sounds: HashMap::new(),
            next_user_id: 1,
            next_timetable_id: 1,
            next_event_id: 1,
            next_template_id: 1,
            next_template_item_id: 1,
            next_holiday_id: 1,
            next_sound_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of timetables stored, across all users.
    pub fn timetable_count(&self) -> usize {
        self.data.read().unwrap().timetables.len()
    }

    /// Get the number of sound records stored.
    pub fn sound_count(&self) -> usize {
        self.data.read().unwrap().sounds.len()
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Database is not healthy"));
        }
        Ok(())
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalData {
    /// Fetch one of `owner`'s timetables or report NotFound. A timetable
    /// owned by someone else is indistinguishable from a missing one.
    fn timetable(&self, owner: UserId, id: TimetableId) -> RepositoryResult<&Timetable> {
        self.timetables
            .get(&id)
            .filter(|tt| tt.user_id == owner)
            .ok_or_else(|| timetable_not_found(owner, id))
    }

    fn timetable_mut(&mut self, owner: UserId, id: TimetableId) -> RepositoryResult<&mut Timetable> {
        self.timetables
            .get_mut(&id)
            .filter(|tt| tt.user_id == owner)
            .ok_or_else(|| timetable_not_found(owner, id))
    }

    fn build_event(
        &mut self,
        timetable_id: TimetableId,
        draft: &EventDraft,
    ) -> RepositoryResult<TimetableEvent> {
        let event = TimetableEvent::new(
            EventId::new(self.next_event_id),
            timetable_id,
            draft.event_name.clone(),
            draft.event_time,
            draft.sound_id,
            draft.template_instance_id,
            draft.is_template_base,
        )?;
        self.next_event_id += 1;
        Ok(event)
    }
}

fn timetable_not_found(owner: UserId, id: TimetableId) -> RepositoryError {
    RepositoryError::not_found_with_context(
        format!("Timetable {} not found", id),
        ErrorContext::new("get_timetable")
            .with_entity("timetable")
            .with_entity_id(id)
            .with_details(format!("owner={}", owner)),
    )
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn create_user(&self, username: &str, language: &str) -> RepositoryResult<User> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let user = User::new(UserId::new(data.next_user_id), username, language)?;
        data.next_user_id += 1;
        data.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.users.get(&user_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("User {} not found", user_id),
                ErrorContext::new("get_user")
                    .with_entity("user")
                    .with_entity_id(user_id),
            )
        })
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut users: Vec<User> = data.users.values().cloned().collect();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    async fn find_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[async_trait]
impl TimetableRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn create_timetable(
        &self,
        owner: UserId,
        draft: &TimetableDraft,
    ) -> RepositoryResult<Timetable> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let timetable = Timetable::new(
            TimetableId::new(data.next_timetable_id),
            owner,
            draft.name.clone(),
            draft.valid_from,
            draft.valid_until,
            draft.weekdays,
        )?;
        data.next_timetable_id += 1;
        data.timetables.insert(timetable.id, timetable.clone());
        Ok(timetable)
    }

    async fn get_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
    ) -> RepositoryResult<Timetable> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.timetable(owner, timetable_id).cloned()
    }

    async fn list_timetables(&self, owner: UserId) -> RepositoryResult<Vec<Timetable>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut timetables: Vec<Timetable> = data
            .timetables
            .values()
            .filter(|tt| tt.user_id == owner)
            .cloned()
            .collect();
        timetables.sort_by_key(|tt| tt.id);
        Ok(timetables)
    }

    async fn find_timetable_by_name(
        &self,
        owner: UserId,
        name: &str,
    ) -> RepositoryResult<Option<Timetable>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .timetables
            .values()
            .find(|tt| tt.user_id == owner && tt.name == name)
            .cloned())
    }

    async fn update_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        draft: &TimetableDraft,
    ) -> RepositoryResult<Timetable> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        let timetable = data.timetable_mut(owner, timetable_id)?;
        // Explicit field-by-field update; id, owner and events stay put.
        timetable.name = draft.name.clone();
        timetable.valid_from = draft.valid_from;
        timetable.valid_until = draft.valid_until;
        timetable.weekdays = draft.weekdays;
        Ok(timetable.clone())
    }

    async fn delete_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.timetable(owner, timetable_id)?;
        // Events live inside the timetable, so removing it removes them
        // atomically, honoring the cascade contract.
        data.timetables.remove(&timetable_id);
        Ok(())
    }

    async fn insert_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        draft: &EventDraft,
    ) -> RepositoryResult<TimetableEvent> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        data.timetable(owner, timetable_id)?;
        let event = data.build_event(timetable_id, draft)?;
        data.timetable_mut(owner, timetable_id)?
            .events
            .push(event.clone());
        Ok(event)
    }

    async fn insert_events(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        drafts: &[EventDraft],
    ) -> RepositoryResult<Vec<TimetableEvent>> {
        self.check_health()?;
        for draft in drafts {
            draft.validate()?;
        }
        let mut data = self.data.write().unwrap();
        data.timetable(owner, timetable_id)?;
        let mut events = Vec::with_capacity(drafts.len());
        for draft in drafts {
            events.push(data.build_event(timetable_id, draft)?);
        }
        data.timetable_mut(owner, timetable_id)?
            .events
            .extend(events.iter().cloned());
        Ok(events)
    }

    async fn update_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        event_id: EventId,
        draft: &EventDraft,
    ) -> RepositoryResult<TimetableEvent> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        let timetable = data.timetable_mut(owner, timetable_id)?;
        let event = timetable
            .events
            .iter_mut()
            .find(|event| event.id == event_id)
            .ok_or_else(|| {
                RepositoryError::not_found_with_context(
                    format!("Event {} not found", event_id),
                    ErrorContext::new("update_event")
                        .with_entity("timetable_event")
                        .with_entity_id(event_id),
                )
            })?;
        // Explicit field-by-field update; id and owning timetable stay put.
        event.event_name = draft.event_name.clone();
        event.event_time = draft.event_time;
        event.sound_id = draft.sound_id;
        event.template_instance_id = draft.template_instance_id;
        event.is_template_base = draft.is_template_base;
        Ok(event.clone())
    }

    async fn delete_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        event_id: EventId,
    ) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let timetable = data.timetable_mut(owner, timetable_id)?;
        let before = timetable.events.len();
        timetable.events.retain(|event| event.id != event_id);
        if timetable.events.len() == before {
            return Err(RepositoryError::not_found_with_context(
                format!("Event {} not found", event_id),
                ErrorContext::new("delete_event")
                    .with_entity("timetable_event")
                    .with_entity_id(event_id),
            ));
        }
        Ok(())
    }

    async fn delete_template_instance(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        instance: TemplateInstanceId,
    ) -> RepositoryResult<usize> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let timetable = data.timetable_mut(owner, timetable_id)?;
        let before = timetable.events.len();
        timetable
            .events
            .retain(|event| event.template_instance_id != Some(instance));
        Ok(before - timetable.events.len())
    }
}

#[async_trait]
impl TemplateRepository for LocalRepository {
    async fn create_template(&self, draft: &crate::models::TemplateDraft) -> RepositoryResult<EventTemplate> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        let template_id = TemplateId::new(data.next_template_id);
        data.next_template_id += 1;

        let mut items = Vec::with_capacity(draft.items.len());
        for item in &draft.items {
            items.push(EventTemplateItem::new(
                TemplateItemId::new(data.next_template_item_id),
                template_id,
                item.offset_minutes,
                item.event_name.clone(),
                item.sound_id,
            )?);
            data.next_template_item_id += 1;
        }

        let template =
            EventTemplate::new(template_id, draft.name.clone(), draft.description.clone(), items)?;
        data.templates.insert(template_id, template.clone());
        Ok(template)
    }

    async fn get_template(&self, template_id: TemplateId) -> RepositoryResult<EventTemplate> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.templates.get(&template_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Template {} not found", template_id),
                ErrorContext::new("get_template")
                    .with_entity("event_template")
                    .with_entity_id(template_id),
            )
        })
    }

    async fn list_templates(&self) -> RepositoryResult<Vec<EventTemplate>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut templates: Vec<EventTemplate> = data.templates.values().cloned().collect();
        templates.sort_by_key(|template| template.id);
        Ok(templates)
    }

    async fn find_template_by_name(&self, name: &str) -> RepositoryResult<Option<EventTemplate>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .templates
            .values()
            .find(|template| template.name == name)
            .cloned())
    }

    async fn update_template(
        &self,
        template_id: TemplateId,
        draft: &crate::models::TemplateDraft,
    ) -> RepositoryResult<EventTemplate> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        if !data.templates.contains_key(&template_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Template {} not found", template_id),
                ErrorContext::new("update_template")
                    .with_entity("event_template")
                    .with_entity_id(template_id),
            ));
        }

        // Replace the item list wholesale; items get fresh ids.
        let mut items = Vec::with_capacity(draft.items.len());
        for item in &draft.items {
            items.push(EventTemplateItem::new(
                TemplateItemId::new(data.next_template_item_id),
                template_id,
                item.offset_minutes,
                item.event_name.clone(),
                item.sound_id,
            )?);
            data.next_template_item_id += 1;
        }

        let template =
            EventTemplate::new(template_id, draft.name.clone(), draft.description.clone(), items)?;
        data.templates.insert(template_id, template.clone());
        Ok(template)
    }

    async fn delete_template(&self, template_id: TemplateId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        // Items live inside the template record, so this removes them too.
        data.templates.remove(&template_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Template {} not found", template_id),
                ErrorContext::new("delete_template")
                    .with_entity("event_template")
                    .with_entity_id(template_id),
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl HolidayRepository for LocalRepository {
    async fn create_holiday(&self, draft: &HolidayDraft) -> RepositoryResult<Holiday> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let holiday = Holiday::new(
            HolidayId::new(data.next_holiday_id),
            draft.name.clone(),
            draft.valid_from,
            draft.valid_until,
        )?;
        data.next_holiday_id += 1;
        data.holidays.insert(holiday.id, holiday.clone());
        Ok(holiday)
    }

    async fn get_holiday(&self, holiday_id: HolidayId) -> RepositoryResult<Holiday> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.holidays.get(&holiday_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Holiday {} not found", holiday_id),
                ErrorContext::new("get_holiday")
                    .with_entity("holiday")
                    .with_entity_id(holiday_id),
            )
        })
    }

    async fn list_holidays(&self) -> RepositoryResult<Vec<Holiday>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut holidays: Vec<Holiday> = data.holidays.values().cloned().collect();
        holidays.sort_by_key(|holiday| holiday.id);
        Ok(holidays)
    }

    async fn update_holiday(
        &self,
        holiday_id: HolidayId,
        draft: &HolidayDraft,
    ) -> RepositoryResult<Holiday> {
        self.check_health()?;
        draft.validate()?;
        let mut data = self.data.write().unwrap();
        let holiday = data.holidays.get_mut(&holiday_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Holiday {} not found", holiday_id),
                ErrorContext::new("update_holiday")
                    .with_entity("holiday")
                    .with_entity_id(holiday_id),
            )
        })?;
        // Explicit field-by-field update; id stays put.
        holiday.name = draft.name.clone();
        holiday.valid_from = draft.valid_from;
        holiday.valid_until = draft.valid_until;
        Ok(holiday.clone())
    }

    async fn delete_holiday(&self, holiday_id: HolidayId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.holidays.remove(&holiday_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Holiday {} not found", holiday_id),
                ErrorContext::new("delete_holiday")
                    .with_entity("holiday")
                    .with_entity_id(holiday_id),
            )
        })?;
        Ok(())
    }
}

#[async_trait]
impl SoundRepository for LocalRepository {
    async fn create_sound(&self, name: &str, filename: &str) -> RepositoryResult<Sound> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let sound = Sound::new(SoundId::new(data.next_sound_id), name, filename)?;
        data.next_sound_id += 1;
        data.sounds.insert(sound.id, sound.clone());
        Ok(sound)
    }

    async fn get_sound(&self, sound_id: SoundId) -> RepositoryResult<Sound> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        data.sounds.get(&sound_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Sound {} not found", sound_id),
                ErrorContext::new("get_sound")
                    .with_entity("sound")
                    .with_entity_id(sound_id),
            )
        })
    }

    async fn list_sounds(&self) -> RepositoryResult<Vec<Sound>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        let mut sounds: Vec<Sound> = data.sounds.values().cloned().collect();
        sounds.sort_by_key(|sound| sound.id);
        Ok(sounds)
    }

    async fn find_sound_by_name(&self, name: &str) -> RepositoryResult<Option<Sound>> {
        self.check_health()?;
        let data = self.data.read().unwrap();
        Ok(data
            .sounds
            .values()
            .find(|sound| sound.name == name)
            .cloned())
    }

    async fn rename_sound(&self, sound_id: SoundId, name: &str) -> RepositoryResult<Sound> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        let sound = data.sounds.get_mut(&sound_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Sound {} not found", sound_id),
                ErrorContext::new("rename_sound")
                    .with_entity("sound")
                    .with_entity_id(sound_id),
            )
        })?;
        let renamed = Sound::new(sound.id, name, sound.filename.clone())?;
        *sound = renamed.clone();
        Ok(renamed)
    }

    async fn delete_sound(&self, sound_id: SoundId) -> RepositoryResult<()> {
        self.check_health()?;
        let mut data = self.data.write().unwrap();
        data.sounds.remove(&sound_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Sound {} not found", sound_id),
                ErrorContext::new("delete_sound")
                    .with_entity("sound")
                    .with_entity_id(sound_id),
            )
        })?;
        Ok(())
    }
}
