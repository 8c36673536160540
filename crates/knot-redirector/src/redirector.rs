use crate::error::Result;
use async_trait::async_trait;
use knot_core::ShortCode;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves a short code to its original URL.
    ///
    /// Fails with [`ResolveError::NotFound`](crate::ResolveError::NotFound)
    /// when no record carries the code.
    async fn resolve(&self, code: &ShortCode) -> Result<String>;
}
