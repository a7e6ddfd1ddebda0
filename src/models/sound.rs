//! Sound assets referenced by bell events.

use serde::{Deserialize, Serialize};

use super::{validate_name, ValidationError};
use crate::api::SoundId;

/// A named sound, pointing at an externally stored audio file.
///
/// The blob itself lives outside this crate; events and template items only
/// carry the [`SoundId`] and resolution turns it into the filename.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sound {
    pub id: SoundId,
    pub name: String,
    pub filename: String,
}

impl Sound {
    pub fn new(
        id: SoundId,
        name: impl Into<String>,
        filename: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let filename = filename.into();
        validate_name("sound name", &name, 2, 100)?;
        validate_name("sound filename", &filename, 1, 255)?;
        Ok(Sound { id, name, filename })
    }

    /// Filename under which the blob store keeps an uploaded sound.
    pub fn storage_filename(name: &str, original_filename: &str) -> String {
        format!("{}_{}", name, original_filename)
    }
}
