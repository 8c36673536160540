use crate::shortcode::ShortCode;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A storage-engine-assigned record identifier.
///
/// Identifiers are strictly positive, unique, and immutable once assigned.
/// The identifier is the sole input to short code encoding.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MappingId(i64);

impl MappingId {
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl Display for MappingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Input for creating a new URL mapping: the record before an identifier
/// or short code exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMapping {
    /// The destination URL.
    pub original_url: String,
    /// Creation time, set once by the caller.
    pub created_at: Timestamp,
}

impl NewMapping {
    pub fn new(original_url: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            original_url: original_url.into(),
            created_at,
        }
    }
}

/// A stored URL mapping.
///
/// The record is created in two steps: an insert without a short code to
/// obtain the identifier, then an update assigning the encoded code. A
/// record whose `short_code` is still `None` is in a transient state and
/// never matches a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Engine-assigned identifier, immutable once set.
    pub id: MappingId,
    /// The destination URL, set once at creation.
    pub original_url: String,
    /// The encoded alias; `None` between the two creation writes.
    pub short_code: Option<ShortCode>,
    /// Creation time, immutable.
    pub created_at: Timestamp,
}

impl UrlMapping {
    /// Whether the record is stuck between the two creation writes.
    pub fn is_orphan(&self) -> bool {
        self.short_code.is_none()
    }
}
