use crate::error::{ResolveError, Result};
use crate::redirector::Redirector;
use async_trait::async_trait;
use knot_core::{Repository, ShortCode};
use std::sync::Arc;
use tracing::{debug, trace};

/// Service for resolving short codes to their original URLs.
///
/// A thin exact-match lookup over the repository. Resolution is read-only
/// and idempotent: the same valid code always yields the same URL.
#[derive(Debug, Clone)]
pub struct RedirectorService<R> {
    repository: Arc<R>,
}

impl<R: Repository> RedirectorService<R> {
    /// Creates a new `RedirectorService` over the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Creates a service sharing an already-wrapped repository.
    pub fn with_shared(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: Repository> Redirector for RedirectorService<R> {
    async fn resolve(&self, code: &ShortCode) -> Result<String> {
        trace!(code = %code, "resolving short code");

        match self.repository.find_by_short_code(code).await? {
            Some(mapping) => {
                debug!(code = %code, url = %mapping.original_url, "resolved short code");
                Ok(mapping.original_url)
            }
            None => Err(ResolveError::NotFound(code.clone())),
        }
    }
}
