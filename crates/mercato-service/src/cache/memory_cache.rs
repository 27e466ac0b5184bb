//! In-process cache implementation.
//!
//! One process-wide instance is created at startup and injected into the
//! services; its contents are lost on restart. A single mutex around a
//! plain map is the whole concurrency story: `get`/`set`/`invalidate` are
//! atomic with respect to each other, but the cache performs no
//! coordination across concurrent cache-miss fetches. Two callers racing
//! on the same miss will both query the store and both write the cache;
//! the last write wins.

use super::CacheStore;
use async_trait::async_trait;
use mercato_core::CatalogResult;
use parking_lot::Mutex;
use shaku::Component;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Absolute expiration for cached collections (5 minutes).
pub const ABSOLUTE_TTL: Duration = Duration::from_secs(300);

/// Sliding expiration window (2 minutes).
pub const SLIDING_TTL: Duration = Duration::from_secs(120);

/// A cached value with its expiration metadata.
pub struct CacheEntry {
    value: String,
    absolute_deadline: Instant,
    sliding_window: Duration,
    last_access: Instant,
}

impl CacheEntry {
    /// An entry expires once the absolute deadline passes, or once the
    /// sliding window elapses since the last access. Hits extend the
    /// sliding window only; nothing extends the absolute deadline.
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.absolute_deadline
            || now.duration_since(self.last_access) >= self.sliding_window
    }
}

/// In-memory cache service.
#[derive(Component)]
#[shaku(interface = CacheStore)]
pub struct MemoryCacheService {
    /// Key space, guarded by a single lock.
    entries: Mutex<HashMap<String, CacheEntry>>,
    /// Whether the cache is enabled.
    #[shaku(default = true)]
    enabled: bool,
}

impl MemoryCacheService {
    /// Create a new, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            enabled: true,
        }
    }

    /// Create a no-op cache (every read is a miss, writes are dropped).
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            enabled: false,
        }
    }

    /// Create a cache honoring the configured enabled flag.
    #[must_use]
    pub fn from_config(config: &mercato_config::CacheConfig) -> Self {
        if config.enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    /// Looks up a key as of `now`. Expired entries are purged lazily and
    /// reported as misses; a hit refreshes the sliding window.
    fn get_at(&self, key: &str, now: Instant) -> Option<String> {
        let mut entries = self.entries.lock();

        if let Some(entry) = entries.get_mut(key) {
            if !entry.is_expired(now) {
                entry.last_access = now;
                return Some(entry.value.clone());
            }
        } else {
            return None;
        }

        entries.remove(key);
        None
    }

    /// Stores a value as of `now`, overwriting any existing entry and
    /// resetting both expiration timers.
    fn set_at(
        &self,
        key: &str,
        value: &str,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
        now: Instant,
    ) {
        let mut entries = self.entries.lock();
        entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                absolute_deadline: now + absolute_ttl,
                sliding_window: sliding_ttl,
                last_access: now,
            },
        );
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheService {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }

        let value = self.get_at(key, Instant::now());

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
    ) -> CatalogResult<()> {
        if !self.enabled {
            return Ok(());
        }

        self.set_at(key, value, absolute_ttl, sliding_ttl, Instant::now());
        debug!(
            "Cached key '{}' with absolute TTL {}s, sliding TTL {}s",
            key,
            absolute_ttl.as_secs(),
            sliding_ttl.as_secs()
        );
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CatalogResult<bool> {
        if !self.enabled {
            return Ok(false);
        }

        let removed = self.entries.lock().remove(key).is_some();
        debug!("Invalidated key '{}': {}", key, removed);
        Ok(removed)
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheService")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}
