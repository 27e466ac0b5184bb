//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with an in-process
//! implementation. It supports transparent caching of frequently accessed
//! data like the full product listing.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;

pub use cache_interface::{CacheExt, CacheStore};
pub use memory_cache::{MemoryCacheService, MemoryCacheServiceParameters, ABSOLUTE_TTL, SLIDING_TTL};
