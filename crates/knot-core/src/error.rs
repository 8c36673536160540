use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors from the identifier encoder.
///
/// An encoder failure indicates a defect in the caller or in the storage
/// engine's identifier configuration, not a recoverable runtime condition:
/// engine-assigned identifiers are never zero or negative.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("identifier must be strictly positive, got {0}")]
    NonPositiveId(i64),
}

/// Errors from the storage collaborator.
///
/// These are propagated to callers unmodified; the core performs no retry.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("no record with id {0}")]
    UnknownId(i64),
    #[error("storage operation failed: {0}")]
    Operation(String),
}
