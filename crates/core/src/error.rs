//! Shared error model for the domain layer.

use thiserror::Error;

/// Domain-level error.
///
/// Keep this focused on deterministic failures of the domain primitives
/// themselves. Serialization and transport concerns belong to the crates
/// that own them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CoreError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
