//! Core timetable repository trait for CRUD operations.
//!
//! This trait defines the fundamental storage operations for timetables and
//! their events. Write-time business rules (name uniqueness, template
//! application) live in [`crate::db::services`]; the trait itself is plain
//! persistence.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EventId, TemplateInstanceId, TimetableId, UserId};
use crate::models::{EventDraft, Timetable, TimetableDraft, TimetableEvent};

/// Repository trait for timetables and their events.
///
/// All operations are scoped by owner: a timetable is only visible to, and
/// mutable by, the user it belongs to.
#[async_trait]
pub trait TimetableRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the storage backend is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the backend is reachable
    /// - `Ok(false)` if unreachable but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Timetable Operations ====================

    /// Store a new timetable for `owner`.
    ///
    /// The draft is validated against the timetable invariants before it is
    /// stored; the returned timetable carries its assigned ID and an empty
    /// event list.
    async fn create_timetable(
        &self,
        owner: UserId,
        draft: &TimetableDraft,
    ) -> RepositoryResult<Timetable>;

    /// Retrieve one of `owner`'s timetables, with its events.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If it doesn't exist or belongs
    ///   to another user
    async fn get_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
    ) -> RepositoryResult<Timetable>;

    /// List `owner`'s timetables with their events, ordered by ID.
    async fn list_timetables(&self, owner: UserId) -> RepositoryResult<Vec<Timetable>>;

    /// Look up one of `owner`'s timetables by display name.
    async fn find_timetable_by_name(
        &self,
        owner: UserId,
        name: &str,
    ) -> RepositoryResult<Option<Timetable>>;

    /// Overwrite the mutable fields of a timetable from a draft.
    ///
    /// Identity and ownership are not touched: the draft type has no id or
    /// owner field, so an update cannot move a timetable between users.
    async fn update_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        draft: &TimetableDraft,
    ) -> RepositoryResult<Timetable>;

    /// Delete a timetable.
    ///
    /// Contract: atomically deletes every event the timetable owns — an
    /// event cannot outlive its timetable. Implementations enforce this
    /// themselves; it is not delegated to database cascade configuration.
    async fn delete_timetable(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
    ) -> RepositoryResult<()>;

    // ==================== Event Operations ====================

    /// Append one event to a timetable.
    async fn insert_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        draft: &EventDraft,
    ) -> RepositoryResult<TimetableEvent>;

    /// Append a batch of events to a timetable in one consistent write —
    /// used for template application, where the whole expansion lands or
    /// nothing does.
    async fn insert_events(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        drafts: &[EventDraft],
    ) -> RepositoryResult<Vec<TimetableEvent>>;

    /// Overwrite the mutable fields of an event from a draft.
    async fn update_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        event_id: EventId,
        draft: &EventDraft,
    ) -> RepositoryResult<TimetableEvent>;

    /// Delete a single event.
    async fn delete_event(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        event_id: EventId,
    ) -> RepositoryResult<()>;

    /// Delete every event of one template instance group.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of events removed (0 if the group is unknown)
    async fn delete_template_instance(
        &self,
        owner: UserId,
        timetable_id: TimetableId,
        instance: TemplateInstanceId,
    ) -> RepositoryResult<usize>;
}
