//! Catalog write service implementation.

use crate::cache::{cache_keys, CacheStore};
use crate::catalog_write::CatalogWriteService;
use crate::dto::{CreateProductRequest, UpdateProductRequest};
use async_trait::async_trait;
use mercato_core::{
    CatalogError, CatalogResult, CategoryId, NewProduct, Product, ProductId, ValidateExt,
};
use mercato_repository::{ProductRepository, UnitOfWork};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Write service over the product catalog.
///
/// Each operation validates first, runs inside one unit-of-work
/// transaction, and invalidates the cached product collection after a
/// successful commit. Failed or rolled-back writes leave the cache
/// untouched.
#[derive(Component)]
#[shaku(interface = CatalogWriteService)]
pub struct CatalogWriteServiceImpl {
    #[shaku(inject)]
    product_repository: Arc<dyn ProductRepository>,
    #[shaku(inject)]
    unit_of_work: Arc<dyn UnitOfWork>,
    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
}

impl CatalogWriteServiceImpl {
    /// Creates a new write service.
    #[must_use]
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            product_repository,
            unit_of_work,
            cache,
        }
    }

    async fn invalidate_collection(&self) {
        // An invalidation failure degrades to staleness bounded by the TTL.
        if let Err(e) = self.cache.invalidate(&cache_keys::all_products()).await {
            warn!("Failed to invalidate product collection cache: {}", e);
        }
    }
}

#[async_trait]
impl CatalogWriteService for CatalogWriteServiceImpl {
    async fn create_product(&self, request: CreateProductRequest) -> CatalogResult<Product> {
        debug!("Creating product: {}", request.name);

        request.validate_request()?;

        let new_product = NewProduct {
            name: request.name,
            description: request.description,
            price: request.price,
            category_id: request.category_id,
        };

        let mut session = self.unit_of_work.begin().await?;
        let product = match session.insert_product(&new_product).await {
            Ok(product) => product,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };
        session.commit().await?;

        self.invalidate_collection().await;

        info!("Product created with id: {}", product.id);
        Ok(product)
    }

    async fn update_product(
        &self,
        id: ProductId,
        request: UpdateProductRequest,
    ) -> CatalogResult<Product> {
        debug!("Updating product: {}", id);

        request.validate_request()?;

        let current = self
            .product_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Product", id))?;

        let mut product = current.product;
        product.apply_changes(request.name, request.description, request.price);

        let mut session = self.unit_of_work.begin().await?;
        let updated = match session.update_product(&product, request.row_version).await {
            Ok(updated) => updated,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };
        session.commit().await?;

        self.invalidate_collection().await;

        info!("Product {} updated", id);
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        let mut session = self.unit_of_work.begin().await?;
        if let Err(e) = session.delete_product(id).await {
            let _ = session.rollback().await;
            return Err(e);
        }
        session.commit().await?;

        self.invalidate_collection().await;

        info!("Product {} deleted", id);
        Ok(())
    }

    async fn delete_category(&self, id: CategoryId) -> CatalogResult<()> {
        debug!("Deleting category: {}", id);

        let mut session = self.unit_of_work.begin().await?;
        if let Err(e) = session.delete_category(id).await {
            let _ = session.rollback().await;
            return Err(e);
        }
        session.commit().await?;

        // The cascade removed products, so the cached collection is stale.
        self.invalidate_collection().await;

        info!("Category {} deleted along with its products", id);
        Ok(())
    }
}

impl std::fmt::Debug for CatalogWriteServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogWriteServiceImpl").finish_non_exhaustive()
    }
}
