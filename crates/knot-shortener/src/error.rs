use knot_core::{EncodeError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShortenError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    /// The encoder rejected the identifier. Storage engines assign strictly
    /// positive ids, so this indicates a configuration defect.
    #[error("encoding failed: {0}")]
    Encode(#[from] EncodeError),
    /// A storage failure during either of the two writes, propagated
    /// unmodified.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}
