//! Supplier service implementation.

use crate::cache::{cache_keys, CacheStore};
use crate::dto::{AtomicSupplierProductRequest, CreateSupplierRequest, UpdateSupplierRequest};
use crate::supplier_service::SupplierService;
use async_trait::async_trait;
use mercato_core::{
    CatalogError, CatalogResult, NewProduct, NewSupplier, Product, Supplier, SupplierId,
    ValidateExt,
};
use mercato_repository::{SupplierRepository, UnitOfWork};
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Supplier operations over the unit-of-work write path.
#[derive(Component)]
#[shaku(interface = SupplierService)]
pub struct SupplierServiceImpl {
    #[shaku(inject)]
    supplier_repository: Arc<dyn SupplierRepository>,
    #[shaku(inject)]
    unit_of_work: Arc<dyn UnitOfWork>,
    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
}

impl SupplierServiceImpl {
    /// Creates a new supplier service.
    #[must_use]
    pub fn new(
        supplier_repository: Arc<dyn SupplierRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            supplier_repository,
            unit_of_work,
            cache,
        }
    }

    async fn invalidate_product_collection(&self) {
        if let Err(e) = self.cache.invalidate(&cache_keys::all_products()).await {
            warn!("Failed to invalidate product collection cache: {}", e);
        }
    }
}

#[async_trait]
impl SupplierService for SupplierServiceImpl {
    async fn list_suppliers(&self) -> CatalogResult<Vec<Supplier>> {
        debug!("Listing suppliers");
        self.supplier_repository.find_all().await
    }

    async fn get_supplier(&self, id: SupplierId) -> CatalogResult<Supplier> {
        debug!("Getting supplier: {}", id);

        self.supplier_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Supplier", id))
    }

    async fn create_supplier(&self, request: CreateSupplierRequest) -> CatalogResult<Supplier> {
        debug!("Creating supplier: {}", request.name);

        request.validate_request()?;

        let new_supplier = NewSupplier {
            name: request.name,
            description: request.description,
            contact_email: request.contact_email,
        };

        let mut session = self.unit_of_work.begin().await?;
        let supplier = match session.insert_supplier(&new_supplier).await {
            Ok(supplier) => supplier,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };
        session.commit().await?;

        info!("Supplier created with id: {}", supplier.id);
        Ok(supplier)
    }

    async fn update_supplier(
        &self,
        id: SupplierId,
        request: UpdateSupplierRequest,
    ) -> CatalogResult<Supplier> {
        debug!("Updating supplier: {}", id);

        request.validate_request()?;

        let mut supplier = self
            .supplier_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("Supplier", id))?;

        supplier.apply_changes(request.name, request.description, request.contact_email);

        let mut session = self.unit_of_work.begin().await?;
        let updated = match session.update_supplier(&supplier).await {
            Ok(updated) => updated,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };
        session.commit().await?;

        info!("Supplier {} updated", id);
        Ok(updated)
    }

    async fn delete_supplier(&self, id: SupplierId) -> CatalogResult<()> {
        debug!("Deleting supplier: {}", id);

        let mut session = self.unit_of_work.begin().await?;
        if let Err(e) = session.delete_supplier(id).await {
            let _ = session.rollback().await;
            return Err(e);
        }
        session.commit().await?;

        info!("Supplier {} deleted", id);
        Ok(())
    }

    async fn create_supplier_with_product(
        &self,
        request: AtomicSupplierProductRequest,
    ) -> CatalogResult<(Supplier, Product)> {
        debug!(
            "Creating supplier '{}' and product '{}' atomically",
            request.supplier.name, request.product.name
        );

        request.validate_request()?;

        let new_supplier = NewSupplier {
            name: request.supplier.name,
            description: request.supplier.description,
            contact_email: request.supplier.contact_email,
        };
        let new_product = NewProduct {
            name: request.product.name,
            description: request.product.description,
            price: request.product.price,
            category_id: request.product.category_id,
        };

        let mut session = self.unit_of_work.begin().await?;

        let supplier = match session.insert_supplier(&new_supplier).await {
            Ok(supplier) => supplier,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };
        let product = match session.insert_product(&new_product).await {
            Ok(product) => product,
            Err(e) => {
                let _ = session.rollback().await;
                return Err(e);
            }
        };

        // Both inserts ride one commit.
        session.commit().await?;

        // The product listing changed, so the cached collection is stale.
        self.invalidate_product_collection().await;

        info!(
            "Supplier {} and product {} created atomically",
            supplier.id, product.id
        );
        Ok((supplier, product))
    }
}

impl std::fmt::Debug for SupplierServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupplierServiceImpl").finish_non_exhaustive()
    }
}
