//! Validation errors raised at the entity-construction boundary.
//!
//! These errors are local and recoverable: the storage layer rejects the
//! offending write and the caller fixes its input. They never occur during
//! resolution, which assumes already-validated entities.

use chrono::NaiveDate;

/// Error type for entity validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Weekday bitmask outside 1..=127. A mask of 0 would mean "never
    /// applies" and is rejected at construction rather than silently
    /// matching nothing.
    #[error("weekday mask {value} is out of range (expected 1..=127)")]
    InvalidMask { value: u8 },

    /// Validity window with `valid_until` before `valid_from`.
    #[error("validity window is inverted: {valid_until} is before {valid_from}")]
    InvalidWindow {
        valid_from: NaiveDate,
        valid_until: NaiveDate,
    },

    /// Template item offset outside the allowed ±120 minutes.
    #[error("template offset {offset_minutes} min is out of range (expected -120..=120)")]
    OffsetOutOfRange { offset_minutes: i32 },

    /// A name or description outside its length bounds.
    #[error("{field} must be {min}..={max} characters, got {len}")]
    NameLength {
        field: &'static str,
        len: usize,
        min: usize,
        max: usize,
    },
}
