//! Result type alias for the Mercato catalog.

use crate::CatalogError;

/// A specialized `Result` type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
