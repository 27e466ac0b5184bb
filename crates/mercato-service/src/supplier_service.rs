//! Supplier service trait definition.

use crate::dto::{AtomicSupplierProductRequest, CreateSupplierRequest, UpdateSupplierRequest};
use async_trait::async_trait;
use mercato_core::{CatalogResult, Interface, Product, Supplier, SupplierId};

/// Supplier operations, all writes going through the unit-of-work path.
#[async_trait]
pub trait SupplierService: Interface + Send + Sync {
    /// Lists all suppliers.
    async fn list_suppliers(&self) -> CatalogResult<Vec<Supplier>>;

    /// Gets a supplier by ID.
    async fn get_supplier(&self, id: SupplierId) -> CatalogResult<Supplier>;

    /// Creates a supplier.
    async fn create_supplier(&self, request: CreateSupplierRequest) -> CatalogResult<Supplier>;

    /// Applies a partial update to a supplier.
    async fn update_supplier(
        &self,
        id: SupplierId,
        request: UpdateSupplierRequest,
    ) -> CatalogResult<Supplier>;

    /// Deletes a supplier.
    async fn delete_supplier(&self, id: SupplierId) -> CatalogResult<()>;

    /// Creates a supplier and a product atomically: both inserts commit in
    /// one transaction or neither persists.
    async fn create_supplier_with_product(
        &self,
        request: AtomicSupplierProductRequest,
    ) -> CatalogResult<(Supplier, Product)>;
}
