use crate::error::Result;
use jiff::{SignedDuration, Timestamp};
use knot_core::{Base62Encoder, Repository};
use std::sync::Arc;
use tracing::{debug, warn};

/// Out-of-band repair for records stranded between the two creation writes.
///
/// A failure after the create but before the code-assigning update leaves a
/// record with an identifier and a URL but no short code. Nothing is lost:
/// the code is a pure function of the identifier, so the sweep recomputes
/// it and finishes the interrupted second write. Run this periodically from
/// a background task; it is never invoked inside the shorten path.
#[derive(Debug, Clone)]
pub struct Reconciler<R> {
    repository: Arc<R>,
    encoder: Base62Encoder,
}

impl<R: Repository> Reconciler<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
            encoder: Base62Encoder::new(),
        }
    }

    /// Creates a reconciler sharing an already-wrapped repository.
    pub fn with_shared(repository: Arc<R>) -> Self {
        Self {
            repository,
            encoder: Base62Encoder::new(),
        }
    }

    /// Repairs orphans older than the given age and returns how many were
    /// fixed. The age threshold keeps the sweep from racing an in-flight
    /// shorten call that simply has not reached its second write yet.
    pub async fn sweep(&self, older_than: SignedDuration) -> Result<usize> {
        let cutoff = Timestamp::now() - older_than;
        let orphans = self.repository.find_orphans(cutoff).await?;

        let mut repaired = 0;
        for mut mapping in orphans {
            let code = self.encoder.encode(mapping.id)?;
            debug!(id = %mapping.id, code = %code, "repairing orphaned mapping");
            mapping.short_code = Some(code);
            self.repository.update(&mapping).await?;
            repaired += 1;
        }

        if repaired > 0 {
            warn!(repaired, "repaired mappings left over from interrupted writes");
        }
        Ok(repaired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knot_core::{NewMapping, ShortCode};
    use knot_storage::InMemoryRepository;

    async fn strand_orphan(repo: &InMemoryRepository, url: &str, age: SignedDuration) {
        // Only the first of the two writes, as if the process died here.
        repo.create(NewMapping::new(url, Timestamp::now() - age))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn sweep_repairs_old_orphans() {
        let repo = Arc::new(InMemoryRepository::new());
        strand_orphan(&repo, "https://example.com", SignedDuration::from_secs(600)).await;

        let reconciler = Reconciler::with_shared(Arc::clone(&repo));
        let repaired = reconciler.sweep(SignedDuration::from_secs(60)).await.unwrap();
        assert_eq!(repaired, 1);

        // The repaired record resolves under the code its id encodes to.
        let found = repo
            .find_by_short_code(&ShortCode::new("1"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn sweep_skips_recent_orphans() {
        let repo = Arc::new(InMemoryRepository::new());
        strand_orphan(&repo, "https://example.com", SignedDuration::ZERO).await;

        let reconciler = Reconciler::with_shared(Arc::clone(&repo));
        let repaired = reconciler.sweep(SignedDuration::from_secs(60)).await.unwrap();
        assert_eq!(repaired, 0);

        let orphans = repo.find_orphans(Timestamp::now()).await.unwrap();
        assert_eq!(orphans.len(), 1);
    }

    #[tokio::test]
    async fn sweep_on_clean_store_is_a_no_op() {
        let reconciler = Reconciler::new(InMemoryRepository::new());
        let repaired = reconciler.sweep(SignedDuration::ZERO).await.unwrap();
        assert_eq!(repaired, 0);
    }

    #[tokio::test]
    async fn sweep_is_idempotent() {
        let repo = Arc::new(InMemoryRepository::new());
        strand_orphan(&repo, "https://example.com", SignedDuration::from_secs(600)).await;

        let reconciler = Reconciler::with_shared(Arc::clone(&repo));
        assert_eq!(reconciler.sweep(SignedDuration::ZERO).await.unwrap(), 1);
        assert_eq!(reconciler.sweep(SignedDuration::ZERO).await.unwrap(), 0);
    }
}
