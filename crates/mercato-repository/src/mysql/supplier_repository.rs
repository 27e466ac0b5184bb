//! MySQL supplier read adapter.

use crate::{pool::DatabasePoolInterface, traits::SupplierRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_core::{CatalogResult, Supplier, SupplierId};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL supplier repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = SupplierRepository)]
pub struct MySqlSupplierRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlSupplierRepository {
    /// Creates a new MySQL supplier repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a supplier.
#[derive(Debug, FromRow)]
struct SupplierRow {
    id: i64,
    name: String,
    description: Option<String>,
    contact_email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            id: SupplierId::new(row.id),
            name: row.name,
            description: row.description,
            contact_email: row.contact_email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl SupplierRepository for MySqlSupplierRepository {
    async fn find_by_id(&self, id: SupplierId) -> CatalogResult<Option<Supplier>> {
        debug!("Finding supplier by id: {}", id);

        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, name, description, contact_email, created_at, updated_at
            FROM suppliers
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Supplier::from))
    }

    async fn find_all(&self) -> CatalogResult<Vec<Supplier>> {
        debug!("Finding all suppliers");

        let rows = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, name, description, contact_email, created_at, updated_at
            FROM suppliers
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }
}

impl std::fmt::Debug for MySqlSupplierRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlSupplierRepository").finish_non_exhaustive()
    }
}
