//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic data failures (out-of-domain values).
/// IO and parsing concerns belong to the infra layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a score outside 0..=100).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// A record that failed derivation, with its 1-based position in the input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("row {row}: {source}")]
pub struct RowError {
    pub row: usize,
    #[source]
    pub source: DomainError,
}
