//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, per-record failures (validation,
/// malformed values). Infrastructure concerns belong elsewhere. Serializable
/// so per-record diagnostics can travel inside computed snapshots.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// A record failed validation (e.g. blank name or SKU).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A numeric field held a value the domain forbids (e.g. negative
    /// quantity or unit price). Never silently clamped.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
