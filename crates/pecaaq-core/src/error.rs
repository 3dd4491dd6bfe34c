//! # Error Types
//!
//! Domain-specific error types for pecaaq-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pecaaq-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog load contract violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Storefront errors (app shell)                                         │
//! │  └── AppError         - What the render layer sees (serialized)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, parcel count, etc.)
//! 3. Errors are enum variants, never String
//!
//! Note that an empty filtered result is NOT an error anywhere in this crate:
//! it is a valid, displayable "no products found" state.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog-level errors.
///
/// The static seed shipped with the storefront never triggers these, but the
/// load contract must hold for any future dynamic loader.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two products in the seed share the same id.
    ///
    /// ## When This Occurs
    /// - A loader hands `Catalog::load` a sequence with a repeated `id`
    /// - Product ids are the cart and lookup key, so duplicates are rejected
    ///   outright rather than deduplicated
    #[error("Duplicate product id {id} in catalog data")]
    DuplicateProductId { id: u32 },

    /// A product declares an installment count below 1.
    ///
    /// `parcels` is the divisor in the installment display
    /// ("Em até 3x R$ 40,00"), so zero is never a legal value.
    #[error("Product {id} has invalid installment count {parcels} (minimum 1)")]
    InvalidParcelCount { id: u32, parcels: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before pipeline logic runs.
///
/// A single variant for now: the query length cap is the only input rule
/// that hard-fails (price text degrades permissively instead, see
/// [`validation::parse_price_input`](crate::validation::parse_price_input)).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
