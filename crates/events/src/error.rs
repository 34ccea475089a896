//! Failure model for the event library.
//!
//! Two kinds, never conflated: a serialization failure means the text or map
//! form could not structurally (de)code and always wraps its cause; a
//! validation failure is only raised through an explicit
//! [`ValidationResult::raise_if_invalid`](crate::ValidationResult::raise_if_invalid)
//! step and carries the complete ordered rule-violation list.

use thiserror::Error;

/// Result type used across the event library.
pub type EventResult<T> = Result<T, EventError>;

#[derive(Debug, Error)]
pub enum EventError {
    /// Encoding/decoding could not structurally succeed (malformed JSON,
    /// type-coercion mismatch). The underlying codec failure is recorded as
    /// the source, never surfaced as the error type itself.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An envelope or domain event violated the CloudEvents structural
    /// rules. Carries every violation, in rule-evaluation order.
    #[error("event validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl EventError {
    /// All collected rule violations for a validation failure, empty for
    /// serialization failures.
    pub fn violations(&self) -> &[String] {
        match self {
            EventError::Validation(errors) => errors,
            EventError::Serialization(_) => &[],
        }
    }
}
