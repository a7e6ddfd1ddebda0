//! Error types for the resolution engine.

use chrono::NaiveTime;

/// Result type for resolution operations.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Error type for resolution and template expansion.
///
/// Entity validation errors never appear here: malformed entities are
/// rejected at construction time by [`crate::models`]. A `ResolveError` is
/// reported to the caller and never retried — the computation is
/// deterministic, so retrying cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A template item's offset would push its event outside the anchor's
    /// calendar day. Expansion is clamped to the same day; crossing midnight
    /// is rejected rather than wrapped.
    #[error(
        "template expansion leaves the anchor's calendar day: anchor {anchor}, offset {offset_minutes} min"
    )]
    TemplateExpansionOutOfRange {
        anchor: NaiveTime,
        offset_minutes: i32,
    },

    /// Resolution observed an entity violating an invariant that
    /// construction-time validation should have enforced. Surfaced with
    /// context rather than swallowed; unreachable in a correctly validated
    /// system.
    #[error("precondition violated during resolution: {detail}")]
    PreconditionViolation { detail: String },
}

impl ResolveError {
    /// Create a precondition violation with a diagnostic detail string.
    pub fn precondition(detail: impl Into<String>) -> Self {
        ResolveError::PreconditionViolation {
            detail: detail.into(),
        }
    }
}
