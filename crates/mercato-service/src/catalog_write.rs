//! Catalog write service trait definition.

use crate::dto::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use mercato_core::{CatalogResult, CategoryId, Interface, Product, ProductId};

/// Write side of the product catalog.
///
/// Every operation runs in one unit-of-work transaction and, on success,
/// invalidates the cached product collection so the next read repopulates
/// from the store.
#[async_trait]
pub trait CatalogWriteService: Interface + Send + Sync {
    /// Creates a product. Returns the stored record with its server-assigned
    /// id and initial version token.
    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<Product>;

    /// Applies a partial update to a product.
    ///
    /// When the request carries a version token, the token is compared
    /// against the store's current one as part of the update; a mismatch
    /// fails with a concurrency conflict and changes nothing.
    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<Product>;

    /// Deletes a product.
    async fn delete_product(&self, id: ProductId) -> CatalogResult<()>;

    /// Deletes a category, cascading to its products.
    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()>;
}
