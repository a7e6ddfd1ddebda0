//! User repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::UserId;
use crate::models::User;

/// Repository trait for timetable owners.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user with the given username and interface language.
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user with its assigned ID
    /// * `Err(RepositoryError::ValidationError)` - If the username is invalid
    async fn create_user(&self, username: &str, language: &str) -> RepositoryResult<User>;

    /// Retrieve a user by ID.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the user doesn't exist
    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User>;

    /// List all users, ordered by ID.
    async fn list_users(&self) -> RepositoryResult<Vec<User>>;

    /// Look up a user by username.
    async fn find_user_by_username(&self, username: &str) -> RepositoryResult<Option<User>>;
}
