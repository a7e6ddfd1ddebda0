//! Event template repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::TemplateId;
use crate::models::{EventTemplate, TemplateDraft};

/// Repository trait for event templates.
///
/// Templates are system-wide, not owner-scoped.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Store a new template together with its items.
    async fn create_template(&self, draft: &TemplateDraft) -> RepositoryResult<EventTemplate>;

    /// Retrieve a template with its items.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the template doesn't exist
    async fn get_template(&self, template_id: TemplateId) -> RepositoryResult<EventTemplate>;

    /// List all templates with their items, ordered by ID.
    async fn list_templates(&self) -> RepositoryResult<Vec<EventTemplate>>;

    /// Look up a template by name.
    async fn find_template_by_name(&self, name: &str) -> RepositoryResult<Option<EventTemplate>>;

    /// Overwrite a template from a draft.
    ///
    /// The item list is replaced wholesale: old items are deleted and the
    /// draft's items stored fresh, matching the update semantics of the web
    /// frontend's template editor.
    async fn update_template(
        &self,
        template_id: TemplateId,
        draft: &TemplateDraft,
    ) -> RepositoryResult<EventTemplate>;

    /// Delete a template.
    ///
    /// Contract: atomically deletes the template's items. Events already
    /// spawned from the template are untouched — they are concrete events
    /// owned by their timetables.
    async fn delete_template(&self, template_id: TemplateId) -> RepositoryResult<()>;
}
