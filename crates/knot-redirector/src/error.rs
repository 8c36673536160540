use knot_core::{ShortCode, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, Clone, Error)]
pub enum ResolveError {
    /// No record carries this short code. A normal, expected outcome, not a
    /// defect; records still waiting for their second write also land here.
    #[error("short code not found: {0}")]
    NotFound(ShortCode),
    /// A storage failure during lookup, propagated unmodified.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
