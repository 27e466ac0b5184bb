//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use mercato_core::CatalogResult;
use shaku::Interface;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// This trait provides an abstraction over caching implementations,
/// allowing for easy swapping between in-memory or other cache backends.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
#[async_trait]
pub trait CacheStore: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired. Expired
    /// entries count as misses whether or not they have been purged yet.
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<String>>;

    /// Set a raw JSON value in the cache.
    ///
    /// The entry expires once `absolute_ttl` has elapsed since this call,
    /// or once `sliding_ttl` has elapsed since the last access, whichever
    /// comes first. Setting an existing key overwrites the value and resets
    /// both timers.
    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
    ) -> CatalogResult<()>;

    /// Remove a value from the cache.
    ///
    /// Returns `true` if the key existed and was removed.
    async fn invalidate(&self, key: &str) -> CatalogResult<bool>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any serializable type.
#[async_trait]
pub trait CacheExt: CacheStore {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> CatalogResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        absolute_ttl: Duration,
        sliding_ttl: Duration,
    ) -> CatalogResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, absolute_ttl, sliding_ttl).await
    }
}

// Blanket implementation for all CacheStore implementations
impl<T: CacheStore + ?Sized> CacheExt for T {}
