//! Product-related DTOs.

use mercato_core::{
    CatalogError, CatalogResult, CategoryId, ProductId, ProductWithCategory, RowVersion,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new product.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(
        length(min = 1, max = 200, message = "Name cannot exceed 200 characters"),
        custom(function = "mercato_core::rules::not_blank", message = "Name is required")
    )]
    pub name: String,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.01, max = 999_999.99, message = "Price must be between 0.01 and 999999.99"))]
    pub price: f64,

    #[schema(value_type = i64)]
    pub category_id: CategoryId,
}

/// Request to update an existing product.
///
/// All fields are optional: unsupplied fields keep their current values.
/// `row_version` carries the version token the caller last read; when
/// present, the update fails with a conflict if another writer has
/// committed since.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[validate(length(max = 200, message = "Name cannot exceed 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.01, max = 999_999.99, message = "Price must be between 0.01 and 999999.99"))]
    pub price: Option<f64>,

    #[schema(value_type = Option<String>)]
    pub row_version: Option<RowVersion>,
}

/// Product projection returned by the read path.
///
/// Carries the denormalized category name and no back-reference to the
/// category, so there is nothing cyclic to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(value_type = i64)]
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    #[schema(value_type = i64)]
    pub category_id: CategoryId,
    pub category_name: String,
}

impl From<ProductWithCategory> for ProductResponse {
    fn from(record: ProductWithCategory) -> Self {
        Self {
            id: record.product.id,
            name: record.product.name,
            description: record.product.description,
            price: record.product.price,
            category_id: record.product.category_id,
            category_name: record.category_name,
        }
    }
}

/// Response format hint for list and single-item reads.
///
/// Rendering is the presentation layer's job; the services only reject
/// hints they do not understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Json,
    Xml,
}

impl ResponseFormat {
    /// Parses a format hint.
    pub fn parse(hint: &str) -> CatalogResult<Self> {
        match hint.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            other => Err(CatalogError::validation(format!(
                "Format '{}' not supported. Use 'json' or 'xml'.",
                other
            ))),
        }
    }
}
