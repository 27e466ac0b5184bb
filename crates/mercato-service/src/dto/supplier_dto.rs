//! Supplier-related DTOs.

use crate::dto::CreateProductRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new supplier.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSupplierRequest {
    #[validate(
        length(min = 1, max = 200, message = "Name cannot exceed 200 characters"),
        custom(function = "mercato_core::rules::not_blank", message = "Name is required")
    )]
    pub name: String,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(
        email(message = "Invalid contact email"),
        length(max = 100, message = "Contact email cannot exceed 100 characters")
    )]
    pub contact_email: Option<String>,
}

/// Request to update an existing supplier.
///
/// All fields are optional: unsupplied fields keep their current values.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSupplierRequest {
    #[validate(length(max = 200, message = "Name cannot exceed 200 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description cannot exceed 1000 characters"))]
    pub description: Option<String>,

    #[validate(
        email(message = "Invalid contact email"),
        length(max = 100, message = "Contact email cannot exceed 100 characters")
    )]
    pub contact_email: Option<String>,
}

/// Request to create a supplier and a product in one transaction.
///
/// Both inserts commit together or not at all.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AtomicSupplierProductRequest {
    #[validate(nested)]
    pub supplier: CreateSupplierRequest,

    #[validate(nested)]
    pub product: CreateProductRequest,
}
