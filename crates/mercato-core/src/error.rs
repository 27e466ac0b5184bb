//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the Mercato catalog.
///
/// Covers domain, store, and cache failures. The presentation layer maps
/// each variant to a status code via [`status_code`](CatalogError::status_code).
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Resource not found
    #[error("{resource_type} with id {id} was not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error with per-field messages
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Optimistic-concurrency conflict: the record was modified by another
    /// writer after the submitted version token was read
    #[error("{resource_type} with id {id} was modified by another writer")]
    ConcurrencyConflict {
        resource_type: &'static str,
        id: String,
    },

    /// Backing-store error (always rolled back before being surfaced)
    #[error("Store error: {0}")]
    Store(String),

    /// Cache error. Read paths treat this as a cache miss and fall back to
    /// the store; it must never fail a request on its own.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation { .. } => 400,
            Self::ConcurrencyConflict { .. } => 409,
            Self::Store(_) | Self::Cache(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::ConcurrencyConflict { .. } => "CONCURRENCY_CONFLICT",
            Self::Store(_) => "STORE_ERROR",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error without field details.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a concurrency conflict error for a resource.
    #[must_use]
    pub fn concurrency_conflict<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::ConcurrencyConflict {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error carries internal detail that should be hidden
    /// from clients outside a debug build of the response.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Store(_) | Self::Cache(_) | Self::Internal(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for CatalogError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            _ => Self::Store(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Request trace ID for debugging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates an error response from a `CatalogError`, suppressing internal
    /// detail (raw store and cache errors) behind a generic message.
    #[must_use]
    pub fn from_error(error: &CatalogError) -> Self {
        let message = if error.is_internal() {
            "An internal error occurred.".to_string()
        } else {
            error.to_string()
        };

        let details = match error {
            CatalogError::Validation { fields, .. } if !fields.is_empty() => {
                Some(fields.clone())
            }
            _ => None,
        };

        Self {
            code: error.error_code().to_string(),
            message,
            details,
            trace_id: None,
        }
    }

    /// Creates an error response that includes internal detail. For debug
    /// builds of the API surface only.
    #[must_use]
    pub fn from_error_detailed(error: &CatalogError) -> Self {
        Self {
            message: error.to_string(),
            ..Self::from_error(error)
        }
    }

    /// Sets the trace ID.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(error: &CatalogError) -> Self {
        Self::from_error(error)
    }
}
