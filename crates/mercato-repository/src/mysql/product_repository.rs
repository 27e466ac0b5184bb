//! MySQL product read adapter.

use crate::{pool::DatabasePoolInterface, traits::ProductRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mercato_core::{
    CatalogError, CatalogResult, CategoryId, Product, ProductId, ProductWithCategory, RowVersion,
};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// MySQL product repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = ProductRepository)]
pub struct MySqlProductRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlProductRepository {
    /// Creates a new MySQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product joined with its category.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    category_id: i64,
    row_version: Vec<u8>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_name: String,
}

impl TryFrom<ProductRow> for ProductWithCategory {
    type Error = CatalogError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let row_version = RowVersion::try_from(row.row_version.as_slice())?;

        Ok(Self {
            product: Product {
                id: ProductId::new(row.id),
                name: row.name,
                description: row.description,
                price: row.price,
                category_id: CategoryId::new(row.category_id),
                row_version,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            category_name: row.category_name,
        })
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<ProductWithCategory>> {
        debug!("Finding product by id: {}", id);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.description, p.price, p.category_id,
                   p.row_version, p.created_at, p.updated_at,
                   c.name AS category_name
            FROM products p
            INNER JOIN categories c ON c.id = p.category_id
            WHERE p.id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(ProductWithCategory::try_from).transpose()
    }

    async fn find_all(&self) -> CatalogResult<Vec<ProductWithCategory>> {
        debug!("Finding all products");

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT p.id, p.name, p.description, p.price, p.category_id,
                   p.row_version, p.created_at, p.updated_at,
                   c.name AS category_name
            FROM products p
            INNER JOIN categories c ON c.id = p.category_id
            ORDER BY p.id
            "#,
        )
        .fetch_all(self.pool.inner())
        .await?;

        rows.into_iter()
            .map(ProductWithCategory::try_from)
            .collect()
    }
}

impl std::fmt::Debug for MySqlProductRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlProductRepository").finish_non_exhaustive()
    }
}
