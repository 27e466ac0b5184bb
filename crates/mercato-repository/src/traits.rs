//! Store adapter trait definitions.
//!
//! Reads go through the repository traits; writes go through a
//! [`UnitOfWork`] session so that single-aggregate and multi-aggregate
//! writes share one transactional code path.

use async_trait::async_trait;
use mercato_core::{
    CatalogResult, CategoryId, Interface, NewProduct, NewSupplier, Product, ProductId,
    ProductWithCategory, RowVersion, Supplier, SupplierId,
};

/// Product read adapter.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds a product by ID, joined with its category name.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<ProductWithCategory>>;

    /// Finds all products joined with their category names, ordered by id.
    async fn find_all(&self) -> CatalogResult<Vec<ProductWithCategory>>;
}

/// Supplier read adapter.
#[async_trait]
pub trait SupplierRepository: Interface + Send + Sync {
    /// Finds a supplier by ID.
    async fn find_by_id(&self, id: SupplierId) -> CatalogResult<Option<Supplier>>;

    /// Finds all suppliers, ordered by id.
    async fn find_all(&self) -> CatalogResult<Vec<Supplier>>;
}

/// Factory for write sessions.
#[async_trait]
pub trait UnitOfWork: Interface + Send + Sync {
    /// Opens a transaction and returns a session bound to it.
    async fn begin(&self) -> CatalogResult<Box<dyn UowSession>>;
}

/// A write session owning one open transaction.
///
/// Every operation issued through one session commits or rolls back
/// together. Dropping a session without committing rolls the transaction
/// back.
#[async_trait]
pub trait UowSession: Send {
    /// Inserts a product; the store assigns the id and the initial version
    /// token.
    async fn insert_product(&mut self, product: &NewProduct) -> CatalogResult<Product>;

    /// Updates a product.
    ///
    /// When `expected_version` is supplied it becomes part of the update
    /// predicate: if the store's current token differs, the update fails
    /// with a concurrency conflict and applies no change. A successful
    /// update mints a new token.
    async fn update_product(
        &mut self,
        product: &Product,
        expected_version: Option<RowVersion>,
    ) -> CatalogResult<Product>;

    /// Deletes a product.
    async fn delete_product(&mut self, id: ProductId) -> CatalogResult<()>;

    /// Deletes a category. Cascades to delete its products.
    async fn delete_category(&mut self, id: CategoryId) -> CatalogResult<()>;

    /// Inserts a supplier; the store assigns the id.
    async fn insert_supplier(&mut self, supplier: &NewSupplier) -> CatalogResult<Supplier>;

    /// Updates a supplier (last-write-wins).
    async fn update_supplier(&mut self, supplier: &Supplier) -> CatalogResult<Supplier>;

    /// Deletes a supplier.
    async fn delete_supplier(&mut self, id: SupplierId) -> CatalogResult<()>;

    /// Commits every pending change. Returns the total rows affected.
    async fn commit(self: Box<Self>) -> CatalogResult<u64>;

    /// Rolls the transaction back, discarding every pending change.
    async fn rollback(self: Box<Self>) -> CatalogResult<()>;
}
