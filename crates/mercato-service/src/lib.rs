//! # Mercato Service
//!
//! Business logic service layer for the Mercato catalog: the cache-aside
//! read path, the optimistic-concurrency write path, and the supplier
//! operations built on the unit-of-work adapter.

pub mod cache;
pub mod catalog_read;
pub mod catalog_write;
pub mod dto;
pub mod r#impl;
pub mod supplier_service;

pub use cache::*;
pub use catalog_read::*;
pub use catalog_write::*;
pub use dto::*;
pub use r#impl::*;
pub use supplier_service::*;
