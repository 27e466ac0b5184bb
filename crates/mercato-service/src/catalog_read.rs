//! Catalog read service trait definition.

use crate::dto::ProductResponse;
use async_trait::async_trait;
use mercato_core::{CatalogResult, Interface, ProductId};

/// Read side of the product catalog.
#[async_trait]
pub trait CatalogReadService: Interface + Send + Sync {
    /// Lists all products, cache-aside under a fixed collection key.
    ///
    /// A cache hit returns the cached sequence verbatim; callers must
    /// accept possibly-stale data within the TTL window. The optional
    /// format hint is validated but rendering is left to the caller.
    async fn list_products(&self, format: Option<&str>) -> CatalogResult<Vec<ProductResponse>>;

    /// Gets a single product by ID.
    ///
    /// Single-item reads always query the store; there is no per-id cache
    /// key in this design.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse>;
}
