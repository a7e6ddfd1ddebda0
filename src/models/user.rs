//! Users owning timetables.

use serde::{Deserialize, Serialize};

use super::{validate_name, ValidationError};
use crate::api::UserId;

/// Default interface language for new users.
pub const DEFAULT_LANGUAGE: &str = "et";

/// A timetable owner. Authentication is handled outside this crate; here a
/// user is only an identity that scopes timetables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub language: String,
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        language: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let username = username.into();
        validate_name("username", &username, 2, 100)?;
        Ok(User {
            id,
            username,
            language: language.into(),
        })
    }
}
