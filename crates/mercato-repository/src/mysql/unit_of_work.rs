//! MySQL unit of work over a `sqlx` transaction.

use crate::{
    pool::DatabasePoolInterface,
    traits::{UnitOfWork, UowSession},
};
use async_trait::async_trait;
use chrono::Utc;
use mercato_core::{
    CatalogError, CatalogResult, CategoryId, NewProduct, NewSupplier, Product, ProductId,
    RowVersion, Supplier, SupplierId,
};
use shaku::Component;
use sqlx::{MySql, Transaction};
use std::sync::Arc;
use tracing::debug;

/// MySQL unit-of-work factory.
#[derive(Component)]
#[shaku(interface = UnitOfWork)]
pub struct MySqlUnitOfWork {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUnitOfWork {
    /// Creates a new MySQL unit of work.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for MySqlUnitOfWork {
    async fn begin(&self) -> CatalogResult<Box<dyn UowSession>> {
        debug!("Opening unit-of-work transaction");
        let tx = self.pool.inner().begin().await?;
        Ok(Box::new(MySqlUowSession {
            tx,
            rows_affected: 0,
        }))
    }
}

impl std::fmt::Debug for MySqlUnitOfWork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUnitOfWork").finish_non_exhaustive()
    }
}

/// Write session bound to one open MySQL transaction.
pub struct MySqlUowSession {
    tx: Transaction<'static, MySql>,
    rows_affected: u64,
}

#[async_trait]
impl UowSession for MySqlUowSession {
    async fn insert_product(&mut self, product: &NewProduct) -> CatalogResult<Product> {
        debug!("Inserting product: {}", product.name);

        let row_version = RowVersion::mint();
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, category_id,
                                  row_version, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.category_id.into_inner())
        .bind(&row_version.as_bytes()[..])
        .bind(now)
        .bind(now)
        .execute(&mut *self.tx)
        .await?;

        self.rows_affected += result.rows_affected();

        Ok(Product {
            id: ProductId::new(result.last_insert_id() as i64),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            category_id: product.category_id,
            row_version,
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_product(
        &mut self,
        product: &Product,
        expected_version: Option<RowVersion>,
    ) -> CatalogResult<Product> {
        debug!("Updating product: {}", product.id);

        let row_version = RowVersion::mint();
        let updated_at = Utc::now();

        let result = if let Some(expected) = expected_version {
            // The version predicate is the atomic compare-and-update that
            // detects lost updates; no application-level locking is involved.
            sqlx::query(
                r#"
                UPDATE products
                SET name = ?, description = ?, price = ?, category_id = ?,
                    row_version = ?, updated_at = ?
                WHERE id = ? AND row_version = ?
                "#,
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.category_id.into_inner())
            .bind(&row_version.as_bytes()[..])
            .bind(updated_at)
            .bind(product.id.into_inner())
            .bind(&expected.as_bytes()[..])
            .execute(&mut *self.tx)
            .await?
        } else {
            sqlx::query(
                r#"
                UPDATE products
                SET name = ?, description = ?, price = ?, category_id = ?,
                    row_version = ?, updated_at = ?
                WHERE id = ?
                "#,
            )
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.category_id.into_inner())
            .bind(&row_version.as_bytes()[..])
            .bind(updated_at)
            .bind(product.id.into_inner())
            .execute(&mut *self.tx)
            .await?
        };

        if result.rows_affected() == 0 {
            // Zero rows means either the row is gone or the token mismatched.
            let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM products WHERE id = ?")
                .bind(product.id.into_inner())
                .fetch_optional(&mut *self.tx)
                .await?;

            return Err(if exists.is_some() {
                CatalogError::concurrency_conflict("Product", product.id)
            } else {
                CatalogError::not_found("Product", product.id)
            });
        }

        self.rows_affected += result.rows_affected();

        Ok(Product {
            row_version,
            updated_at,
            ..product.clone()
        })
    }

    async fn delete_product(&mut self, id: ProductId) -> CatalogResult<()> {
        debug!("Deleting product: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Product", id));
        }

        self.rows_affected += result.rows_affected();
        Ok(())
    }

    async fn delete_category(&mut self, id: CategoryId) -> CatalogResult<()> {
        debug!("Deleting category: {} (cascades to its products)", id);

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Category", id));
        }

        self.rows_affected += result.rows_affected();
        Ok(())
    }

    async fn insert_supplier(&mut self, supplier: &NewSupplier) -> CatalogResult<Supplier> {
        debug!("Inserting supplier: {}", supplier.name);

        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO suppliers (name, description, contact_email, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.description)
        .bind(&supplier.contact_email)
        .bind(now)
        .bind(now)
        .execute(&mut *self.tx)
        .await?;

        self.rows_affected += result.rows_affected();

        Ok(Supplier {
            id: SupplierId::new(result.last_insert_id() as i64),
            name: supplier.name.clone(),
            description: supplier.description.clone(),
            contact_email: supplier.contact_email.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_supplier(&mut self, supplier: &Supplier) -> CatalogResult<Supplier> {
        debug!("Updating supplier: {}", supplier.id);

        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE suppliers
            SET name = ?, description = ?, contact_email = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&supplier.name)
        .bind(&supplier.description)
        .bind(&supplier.contact_email)
        .bind(updated_at)
        .bind(supplier.id.into_inner())
        .execute(&mut *self.tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Supplier", supplier.id));
        }

        self.rows_affected += result.rows_affected();

        Ok(Supplier {
            updated_at,
            ..supplier.clone()
        })
    }

    async fn delete_supplier(&mut self, id: SupplierId) -> CatalogResult<()> {
        debug!("Deleting supplier: {}", id);

        let result = sqlx::query("DELETE FROM suppliers WHERE id = ?")
            .bind(id.into_inner())
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::not_found("Supplier", id));
        }

        self.rows_affected += result.rows_affected();
        Ok(())
    }

    async fn commit(self: Box<Self>) -> CatalogResult<u64> {
        let MySqlUowSession { tx, rows_affected } = *self;
        tx.commit().await?;
        debug!("Unit-of-work committed, {} rows affected", rows_affected);
        Ok(rows_affected)
    }

    async fn rollback(self: Box<Self>) -> CatalogResult<()> {
        let MySqlUowSession { tx, .. } = *self;
        tx.rollback().await?;
        debug!("Unit-of-work rolled back");
        Ok(())
    }
}

impl std::fmt::Debug for MySqlUowSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUowSession")
            .field("rows_affected", &self.rows_affected)
            .finish_non_exhaustive()
    }
}
