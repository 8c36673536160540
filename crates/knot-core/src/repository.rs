use crate::error::Result;
use crate::mapping::{MappingId, NewMapping, UrlMapping};
use crate::shortcode::ShortCode;
use async_trait::async_trait;
use jiff::Timestamp;

/// Storage contract for URL mappings.
///
/// Implementations own all uniqueness and atomicity guarantees the core
/// relies on: [`create`](Repository::create) must return a globally unique,
/// strictly positive identifier per call, and an
/// [`update`](Repository::update) must be visible to subsequent lookups on
/// the same record. The core itself holds no counter and takes no locks, so
/// concurrent workflow invocations interfere only through the backing
/// engine.
#[async_trait]
pub trait Repository: Send + Sync + 'static {
    /// Persists a new mapping without a short code and returns the
    /// engine-assigned identifier.
    async fn create(&self, new: NewMapping) -> Result<MappingId>;

    /// Persists mutated fields of an existing record. The only field that
    /// legally mutates is the short code, set exactly once.
    async fn update(&self, mapping: &UrlMapping) -> Result<()>;

    /// Exact lookup by short code. Records that have not yet been assigned
    /// a code never match.
    async fn find_by_short_code(&self, code: &ShortCode) -> Result<Option<UrlMapping>>;

    /// Returns records still missing a short code that were created before
    /// the cutoff. Feeds the out-of-band reconciliation sweep.
    async fn find_orphans(&self, created_before: Timestamp) -> Result<Vec<UrlMapping>>;
}
