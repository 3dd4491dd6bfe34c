//! # App Error Type
//!
//! Unified error type for the storefront shell.
//!
//! ## Error Handling Strategy
//! The shell serializes errors for whatever frontend consumes it, so the
//! type carries both a machine-readable `code` and a human-readable
//! `message`:
//! ```json
//! {
//!   "code": "NOT_FOUND",
//!   "message": "Product not found: 42"
//! }
//! ```
//!
//! Note the states that are deliberately NOT errors here:
//! - an empty filtered result ("no products found" is a valid page)
//! - out-of-range page navigation (silently clamped)
//! - malformed price input (degrades to the unrestricted bound)

use serde::Serialize;
use thiserror::Error;

use pecaaq_core::CoreError;

/// Error returned from storefront operations.
#[derive(Debug, Clone, Serialize, Error)]
#[error("[{code:?}] {message}")]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for storefront responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (e.g. add-to-cart with an unknown product id)
    NotFound,

    /// Input validation failed (e.g. over-long search query)
    ValidationError,

    /// Catalog data violated the load contract
    InvalidData,

    /// Anything unexpected
    Internal,
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        AppError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DuplicateProductId { .. } | CoreError::InvalidParcelCount { .. } => {
                AppError::new(ErrorCode::InvalidData, err.to_string())
            }
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_maps_to_invalid_data() {
        let err: AppError = CoreError::DuplicateProductId { id: 3 }.into();
        assert_eq!(err.code, ErrorCode::InvalidData);
        assert!(err.message.contains("Duplicate product id 3"));
    }

    #[test]
    fn test_serialized_shape() {
        let err = AppError::not_found("Product", 42);
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(
            json,
            "{\"code\":\"NOT_FOUND\",\"message\":\"Product not found: 42\"}"
        );
    }
}
