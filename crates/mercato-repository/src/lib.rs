//! # Mercato Repository
//!
//! Store adapter for the Mercato catalog:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn ProductRepository> / Arc<dyn SupplierRepository>   (reads)
//!   ↓ Arc<dyn UnitOfWork> → Box<dyn UowSession>                  (writes)
//! MySqlProductRepository / MySqlSupplierRepository / MySqlUnitOfWork
//!   ↓
//! MySQL
//! ```
//!
//! Reads go straight through a repository; every write (single- or
//! multi-aggregate) goes through a unit-of-work session so that one
//! transaction boundary covers the whole logical operation.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use traits::*;
