//! Product entity.

use crate::{CategoryId, ProductId, RowVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Product entity as stored in the catalog.
///
/// The `row_version` token changes on every successful update and is the
/// basis for optimistic-concurrency checks on the write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Product name.
    pub name: String,

    /// Optional free-text description.
    pub description: Option<String>,

    /// Unit price.
    pub price: f64,

    /// Owning category.
    pub category_id: CategoryId,

    /// Opaque concurrency token, replaced on every successful update.
    pub row_version: RowVersion,

    /// Row creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Applies a partial update: unsupplied fields keep their current values.
    pub fn apply_changes(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        price: Option<f64>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(price) = price {
            self.price = price;
        }
        self.updated_at = Utc::now();
    }
}

/// Fields for a product that has not been persisted yet.
///
/// The store assigns the id and the initial version token on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: CategoryId,
}

/// A product joined with its category name, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithCategory {
    pub product: Product,
    pub category_name: String,
}
