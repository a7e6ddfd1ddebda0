//! Holiday repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::HolidayId;
use crate::models::{Holiday, HolidayDraft};

/// Repository trait for system-wide holiday intervals.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Store a new holiday.
    async fn create_holiday(&self, draft: &HolidayDraft) -> RepositoryResult<Holiday>;

    /// Retrieve a holiday by ID.
    async fn get_holiday(&self, holiday_id: HolidayId) -> RepositoryResult<Holiday>;

    /// List all holidays, ordered by ID.
    async fn list_holidays(&self) -> RepositoryResult<Vec<Holiday>>;

    /// Overwrite the mutable fields of a holiday from a draft.
    async fn update_holiday(
        &self,
        holiday_id: HolidayId,
        draft: &HolidayDraft,
    ) -> RepositoryResult<Holiday>;

    /// Delete a holiday.
    async fn delete_holiday(&self, holiday_id: HolidayId) -> RepositoryResult<()>;
}
