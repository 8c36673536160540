use crate::error::Result;
use crate::shortener::Shortener;
use async_trait::async_trait;
use jiff::Timestamp;
use knot_core::{Base62Encoder, NewMapping, Repository, ShortCode, UrlMapping};
use std::sync::Arc;
use tracing::debug;

/// A concrete implementation of the [`Shortener`] trait.
///
/// The service performs the two-phase write: the repository's create call
/// assigns the unique identifier (the service holds no counter and takes no
/// lock), the encoder derives the code from that identifier, and an update
/// persists the code on the same record.
///
/// If the update fails after the create succeeded, the record is left
/// without a code. Such a record never matches a lookup; the
/// [`Reconciler`](crate::reconcile::Reconciler) repairs it out-of-band. The
/// service itself neither retries nor rolls back.
#[derive(Debug, Clone)]
pub struct ShortenerService<R> {
    repository: Arc<R>,
    encoder: Base62Encoder,
}

impl<R: Repository> ShortenerService<R> {
    /// Creates a new `ShortenerService` over the given repository.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            encoder: Base62Encoder::new(),
        }
    }

    /// Creates a service sharing an already-wrapped repository.
    pub fn with_shared(repository: Arc<R>) -> Self {
        Self {
            repository,
            encoder: Base62Encoder::new(),
        }
    }
}

#[async_trait]
impl<R: Repository> Shortener for ShortenerService<R> {
    async fn shorten(&self, original_url: &str) -> Result<ShortCode> {
        let created_at = Timestamp::now();

        // First write: obtain the engine-assigned identifier.
        let id = self
            .repository
            .create(NewMapping::new(original_url, created_at))
            .await?;

        let short_code = self.encoder.encode(id)?;

        // Second write: the record becomes resolvable only once this lands.
        let mapping = UrlMapping {
            id,
            original_url: original_url.to_owned(),
            short_code: Some(short_code.clone()),
            created_at,
        };
        self.repository.update(&mapping).await?;

        debug!(id = %id, code = %short_code, "assigned short code");
        Ok(short_code)
    }
}
