//! Shared in-memory store adapter for service tests.

use async_trait::async_trait;
use chrono::Utc;
use mercato_core::{
    CatalogError, CatalogResult, Category, CategoryId, NewProduct, NewSupplier, Product,
    ProductId, ProductWithCategory, RowVersion, Supplier, SupplierId,
};
use mercato_repository::{ProductRepository, SupplierRepository, UnitOfWork, UowSession};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory stand-in for the backing store, with call counters and
/// failure injection for exercising the write paths.
pub(crate) struct MockCatalogStore {
    pub products: Mutex<HashMap<i64, Product>>,
    pub suppliers: Mutex<HashMap<i64, Supplier>>,
    pub categories: Mutex<HashMap<i64, Category>>,
    next_id: AtomicI64,
    pub find_all_calls: AtomicUsize,
    pub insert_product_calls: AtomicUsize,
    pub insert_supplier_calls: AtomicUsize,
    pub fail_product_inserts: AtomicBool,
    /// When set, `find_all` waits on this barrier so tests can line up
    /// concurrent cache misses deterministically.
    pub find_all_gate: Mutex<Option<Arc<tokio::sync::Barrier>>>,
}

impl MockCatalogStore {
    pub fn new() -> Arc<Self> {
        let store = Self {
            products: Mutex::new(HashMap::new()),
            suppliers: Mutex::new(HashMap::new()),
            categories: Mutex::new(HashMap::new()),
            next_id: AtomicI64::new(1),
            find_all_calls: AtomicUsize::new(0),
            insert_product_calls: AtomicUsize::new(0),
            insert_supplier_calls: AtomicUsize::new(0),
            fail_product_inserts: AtomicBool::new(false),
            find_all_gate: Mutex::new(None),
        };
        store.categories.lock().unwrap().insert(
            1,
            Category {
                id: CategoryId::new(1),
                name: "General".to_string(),
            },
        );
        store.next_id.store(2, Ordering::SeqCst);
        Arc::new(store)
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Seeds a committed product and returns it.
    pub fn seed_product(&self, name: &str) -> Product {
        let now = Utc::now();
        let product = Product {
            id: ProductId::new(self.next_id()),
            name: name.to_string(),
            description: Some("seeded".to_string()),
            price: 9.99,
            category_id: CategoryId::new(1),
            row_version: RowVersion::mint(),
            created_at: now,
            updated_at: now,
        };
        self.products
            .lock()
            .unwrap()
            .insert(product.id.into_inner(), product.clone());
        product
    }

    /// Seeds a committed supplier and returns it.
    pub fn seed_supplier(&self, name: &str) -> Supplier {
        let now = Utc::now();
        let supplier = Supplier {
            id: SupplierId::new(self.next_id()),
            name: name.to_string(),
            description: None,
            contact_email: None,
            created_at: now,
            updated_at: now,
        };
        self.suppliers
            .lock()
            .unwrap()
            .insert(supplier.id.into_inner(), supplier.clone());
        supplier
    }

    fn category_name(&self, id: CategoryId) -> String {
        self.categories
            .lock()
            .unwrap()
            .get(&id.into_inner())
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ProductRepository for MockCatalogStore {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<ProductWithCategory>> {
        let product = self.products.lock().unwrap().get(&id.into_inner()).cloned();
        Ok(product.map(|p| {
            let category_name = self.category_name(p.category_id);
            ProductWithCategory {
                product: p,
                category_name,
            }
        }))
    }

    async fn find_all(&self) -> CatalogResult<Vec<ProductWithCategory>> {
        let gate = self.find_all_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.wait().await;
        }

        self.find_all_calls.fetch_add(1, Ordering::SeqCst);

        let products: Vec<Product> = self.products.lock().unwrap().values().cloned().collect();
        let mut all: Vec<ProductWithCategory> = products
            .into_iter()
            .map(|p| {
                let category_name = self.category_name(p.category_id);
                ProductWithCategory {
                    product: p,
                    category_name,
                }
            })
            .collect();
        all.sort_by_key(|p| p.product.id.into_inner());
        Ok(all)
    }
}

#[async_trait]
impl SupplierRepository for MockCatalogStore {
    async fn find_by_id(&self, id: SupplierId) -> CatalogResult<Option<Supplier>> {
        Ok(self.suppliers.lock().unwrap().get(&id.into_inner()).cloned())
    }

    async fn find_all(&self) -> CatalogResult<Vec<Supplier>> {
        let mut all: Vec<Supplier> = self.suppliers.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|s| s.id.into_inner());
        Ok(all)
    }
}

pub(crate) struct MockUnitOfWork {
    pub store: Arc<MockCatalogStore>,
}

#[async_trait]
impl UnitOfWork for MockUnitOfWork {
    async fn begin(&self) -> CatalogResult<Box<dyn UowSession>> {
        Ok(Box::new(MockSession {
            store: Arc::clone(&self.store),
            pending: Vec::new(),
            rows_affected: 0,
        }))
    }
}

enum PendingOp {
    PutProduct(Product),
    DelProduct(i64),
    DelCategory(i64),
    PutSupplier(Supplier),
    DelSupplier(i64),
}

struct MockSession {
    store: Arc<MockCatalogStore>,
    pending: Vec<PendingOp>,
    rows_affected: u64,
}

#[async_trait]
impl UowSession for MockSession {
    async fn insert_product(&mut self, product: &NewProduct) -> CatalogResult<Product> {
        self.store.insert_product_calls.fetch_add(1, Ordering::SeqCst);

        if self.store.fail_product_inserts.load(Ordering::SeqCst) {
            return Err(CatalogError::store("induced insert failure"));
        }
        let category_known = self
            .store
            .categories
            .lock()
            .unwrap()
            .contains_key(&product.category_id.into_inner());
        if !category_known {
            return Err(CatalogError::store(format!(
                "foreign key violation: category {} does not exist",
                product.category_id
            )));
        }

        let now = Utc::now();
        let stored = Product {
            id: ProductId::new(self.store.next_id()),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category_id: product.category_id,
            row_version: RowVersion::mint(),
            created_at: now,
            updated_at: now,
        };
        self.pending.push(PendingOp::PutProduct(stored.clone()));
        self.rows_affected += 1;
        Ok(stored)
    }

    async fn update_product(
        &mut self,
        product: &Product,
        expected_version: Option<RowVersion>,
    ) -> CatalogResult<Product> {
        let current = self
            .store
            .products
            .lock()
            .unwrap()
            .get(&product.id.into_inner())
            .cloned()
            .ok_or_else(|| CatalogError::not_found("Product", product.id))?;

        if let Some(expected) = expected_version {
            if expected != current.row_version {
                return Err(CatalogError::concurrency_conflict("Product", product.id));
            }
        }

        let updated = Product {
            row_version: RowVersion::mint(),
            updated_at: Utc::now(),
            ..product.clone()
        };
        self.pending.push(PendingOp::PutProduct(updated.clone()));
        self.rows_affected += 1;
        Ok(updated)
    }

    async fn delete_product(&mut self, id: ProductId) -> CatalogResult<()> {
        let known = self
            .store
            .products
            .lock()
            .unwrap()
            .contains_key(&id.into_inner());
        if !known {
            return Err(CatalogError::not_found("Product", id));
        }
        self.pending.push(PendingOp::DelProduct(id.into_inner()));
        self.rows_affected += 1;
        Ok(())
    }

    async fn delete_category(&mut self, id: CategoryId) -> CatalogResult<()> {
        let known = self
            .store
            .categories
            .lock()
            .unwrap()
            .contains_key(&id.into_inner());
        if !known {
            return Err(CatalogError::not_found("Category", id));
        }
        self.pending.push(PendingOp::DelCategory(id.into_inner()));
        self.rows_affected += 1;
        Ok(())
    }

    async fn insert_supplier(&mut self, supplier: &NewSupplier) -> CatalogResult<Supplier> {
        self.store
            .insert_supplier_calls
            .fetch_add(1, Ordering::SeqCst);

        let now = Utc::now();
        let stored = Supplier {
            id: SupplierId::new(self.store.next_id()),
            name: supplier.name.clone(),
            description: supplier.description.clone(),
            contact_email: supplier.contact_email.clone(),
            created_at: now,
            updated_at: now,
        };
        self.pending.push(PendingOp::PutSupplier(stored.clone()));
        self.rows_affected += 1;
        Ok(stored)
    }

    async fn update_supplier(&mut self, supplier: &Supplier) -> CatalogResult<Supplier> {
        let known = self
            .store
            .suppliers
            .lock()
            .unwrap()
            .contains_key(&supplier.id.into_inner());
        if !known {
            return Err(CatalogError::not_found("Supplier", supplier.id));
        }
        let updated = Supplier {
            updated_at: Utc::now(),
            ..supplier.clone()
        };
        self.pending.push(PendingOp::PutSupplier(updated.clone()));
        self.rows_affected += 1;
        Ok(updated)
    }

    async fn delete_supplier(&mut self, id: SupplierId) -> CatalogResult<()> {
        let known = self
            .store
            .suppliers
            .lock()
            .unwrap()
            .contains_key(&id.into_inner());
        if !known {
            return Err(CatalogError::not_found("Supplier", id));
        }
        self.pending.push(PendingOp::DelSupplier(id.into_inner()));
        self.rows_affected += 1;
        Ok(())
    }

    async fn commit(self: Box<Self>) -> CatalogResult<u64> {
        let mut products = self.store.products.lock().unwrap();
        let mut categories = self.store.categories.lock().unwrap();
        let mut suppliers = self.store.suppliers.lock().unwrap();

        for op in self.pending {
            match op {
                PendingOp::PutProduct(p) => {
                    products.insert(p.id.into_inner(), p);
                }
                PendingOp::DelProduct(id) => {
                    products.remove(&id);
                }
                PendingOp::DelCategory(id) => {
                    categories.remove(&id);
                    products.retain(|_, p| p.category_id.into_inner() != id);
                }
                PendingOp::PutSupplier(s) => {
                    suppliers.insert(s.id.into_inner(), s);
                }
                PendingOp::DelSupplier(id) => {
                    suppliers.remove(&id);
                }
            }
        }

        Ok(self.rows_affected)
    }

    async fn rollback(self: Box<Self>) -> CatalogResult<()> {
        Ok(())
    }
}
