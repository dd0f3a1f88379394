//! # Query Cache
//!
//! Best-effort, in-memory, read-through cache keyed by query identity. The
//! list loader writes the full collection here after every successful fetch;
//! other views read it instead of fetching again. There is no invalidation:
//! the last write wins and nothing depends on it for correctness.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;

use crate::api::Country;

/// Identity of a cached query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full country collection.
    Countries,
}

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub countries: Arc<Vec<Country>>,
    pub written_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever is stored under `key`.
    pub fn write(&mut self, key: QueryKey, countries: Vec<Country>) {
        debug!("Cache write {:?}: {} rows", key, countries.len());
        self.entries.insert(
            key,
            CacheEntry {
                countries: Arc::new(countries),
                written_at: Utc::now(),
            },
        );
    }

    pub fn read(&self, key: QueryKey) -> Option<&CacheEntry> {
        self.entries.get(&key)
    }
}
