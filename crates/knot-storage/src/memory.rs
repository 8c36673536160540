use async_trait::async_trait;
use dashmap::DashMap;
use jiff::Timestamp;
use knot_core::error::{Result, StorageError};
use knot_core::{MappingId, NewMapping, Repository, ShortCode, UrlMapping};
use std::sync::atomic::{AtomicI64, Ordering};

/// In-memory implementation of the [`Repository`] contract.
///
/// Rows live in a `DashMap` keyed by identifier, with a secondary index
/// from short code to identifier for exact lookups. DashMap's sharded locks
/// let unrelated creates and lookups proceed concurrently without a global
/// lock.
///
/// Identifiers come from an atomic sequence starting at 1, which gives
/// every `create` call a unique, strictly positive id. Updates replace the
/// whole row, so a completed update is visible to the next lookup
/// (read-after-write on the same record).
#[derive(Debug)]
pub struct InMemoryRepository {
    rows: DashMap<i64, UrlMapping>,
    by_code: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl InMemoryRepository {
    /// Creates an empty repository with the sequence at 1.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            by_code: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored records, orphans included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn create(&self, new: NewMapping) -> Result<MappingId> {
        let id = MappingId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mapping = UrlMapping {
            id,
            original_url: new.original_url,
            short_code: None,
            created_at: new.created_at,
        };
        self.rows.insert(id.get(), mapping);
        Ok(id)
    }

    async fn update(&self, mapping: &UrlMapping) -> Result<()> {
        let key = mapping.id.get();
        let Some(mut row) = self.rows.get_mut(&key) else {
            return Err(StorageError::UnknownId(key));
        };
        *row = mapping.clone();
        drop(row);

        if let Some(code) = &mapping.short_code {
            self.by_code.insert(code.as_str().to_owned(), key);
        }
        Ok(())
    }

    async fn find_by_short_code(&self, code: &ShortCode) -> Result<Option<UrlMapping>> {
        let Some(id) = self.by_code.get(code.as_str()).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn find_orphans(&self, created_before: Timestamp) -> Result<Vec<UrlMapping>> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.is_orphan() && row.created_at < created_before)
            .map(|row| row.value().clone())
            .collect())
    }
}
