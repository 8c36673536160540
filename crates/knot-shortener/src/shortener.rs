use crate::error::Result;
use async_trait::async_trait;
use knot_core::ShortCode;

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Shortens a URL and returns the generated short code.
    ///
    /// The returned code is resolvable as soon as this call completes.
    async fn shorten(&self, original_url: &str) -> Result<ShortCode>;
}
