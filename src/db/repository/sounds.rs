//! Sound repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::SoundId;
use crate::models::Sound;

/// Repository trait for sound metadata.
///
/// Only the name/filename records live here; the audio blobs themselves are
/// stored outside this crate.
#[async_trait]
pub trait SoundRepository: Send + Sync {
    /// Store a new sound record.
    async fn create_sound(&self, name: &str, filename: &str) -> RepositoryResult<Sound>;

    /// Retrieve a sound by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the sound doesn't exist
    async fn get_sound(&self, sound_id: SoundId) -> RepositoryResult<Sound>;

    /// List all sounds, ordered by ID.
    async fn list_sounds(&self) -> RepositoryResult<Vec<Sound>>;

    /// Look up a sound by display name.
    async fn find_sound_by_name(&self, name: &str) -> RepositoryResult<Option<Sound>>;

    /// Rename a sound. The filename is immutable — it points at the stored
    /// blob.
    async fn rename_sound(&self, sound_id: SoundId, name: &str) -> RepositoryResult<Sound>;

    /// Delete a sound record.
    ///
    /// Events referencing the sound are not touched; a dangling reference
    /// surfaces as a warning in the firing plan rather than failing
    /// resolution.
    async fn delete_sound(&self, sound_id: SoundId) -> RepositoryResult<()>;
}
