//! Content-addressed caching of diff segments.
//!
//! The service only needs `get` and `set`; any key-value store with a TTL can
//! sit behind [`DiffCache`]. [`MemoryCache`] keeps entries in-process.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use log::debug;
use sha2::{Digest, Sha256};

use crate::segment::DiffSegment;

/// Expired entries are swept once every this many inserts
const PURGE_INTERVAL: usize = 256;

/// Cache key for a pair of texts: SHA-256 of `old + "|||" + new`, hex encoded
pub fn cache_key(old_text: &str, new_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(old_text.as_bytes());
    hasher.update(b"|||");
    hasher.update(new_text.as_bytes());
    hex::encode(hasher.finalize())
}

/// A store for previously computed diffs
pub trait DiffCache: Send + Sync {
    /// Look up the segments stored under `key`, if any are still valid
    fn get(&self, key: &str) -> Result<Option<Vec<DiffSegment>>>;

    /// Store `segments` under `key` for `ttl`
    fn set(&self, key: &str, segments: &[DiffSegment], ttl: Duration) -> Result<()>;
}

/// A cache that never stores anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl DiffCache for NoopCache {
    fn get(&self, _key: &str) -> Result<Option<Vec<DiffSegment>>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _segments: &[DiffSegment], _ttl: Duration) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    segments: Vec<DiffSegment>,
    stored_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_valid(&self) -> bool {
        self.stored_at.elapsed() < self.ttl
    }
}

/// In-process cache with per-entry TTL.
///
/// Expired entries are removed when a lookup finds them, and swept in bulk
/// every 256 inserts.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    inserts: AtomicUsize,
}

impl MemoryCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet swept
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Check if the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> Result<usize> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("diff cache lock poisoned"))?;
        Ok(Self::retain_valid(&mut entries))
    }

    fn retain_valid(entries: &mut HashMap<String, CacheEntry>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| entry.is_valid());
        let removed = before - entries.len();
        if removed > 0 {
            debug!("purged {} expired diff cache entries", removed);
        }
        removed
    }
}

impl DiffCache for MemoryCache {
    fn get(&self, key: &str) -> Result<Option<Vec<DiffSegment>>> {
        {
            let entries = self
                .entries
                .read()
                .map_err(|_| anyhow!("diff cache lock poisoned"))?;

            match entries.get(key) {
                None => return Ok(None),
                Some(entry) if entry.is_valid() => return Ok(Some(entry.segments.clone())),
                Some(_) => {}
            }
        }

        // Expired: drop it unless another writer refreshed it meanwhile
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("diff cache lock poisoned"))?;
        if entries.get(key).is_some_and(|entry| !entry.is_valid()) {
            entries.remove(key);
        }
        Ok(None)
    }

    fn set(&self, key: &str, segments: &[DiffSegment], ttl: Duration) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| anyhow!("diff cache lock poisoned"))?;

        if (self.inserts.fetch_add(1, Ordering::Relaxed) + 1) % PURGE_INTERVAL == 0 {
            Self::retain_valid(&mut entries);
        }
        entries.insert(
            key.to_string(),
            CacheEntry {
                segments: segments.to_vec(),
                stored_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }
}
