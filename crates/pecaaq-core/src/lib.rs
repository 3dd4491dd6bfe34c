//! # pecaaq-core: Pure Catalog Logic for the PeçaAq Storefront
//!
//! This crate is the **heart** of the PeçaAq storefront. It holds the product
//! catalog and computes the visible product subset as a pure function of
//! (catalog, filter state, sort mode, page) - zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     PeçaAq Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Input Surface                              │   │
//! │  │  Search box ── Brand/category checkboxes ── Price range ──      │   │
//! │  │  Sort select ── Page buttons ── Buy buttons                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ InputEvent                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (shell)                         │   │
//! │  │    Storefront state object ── Cart ── RenderSink                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pecaaq-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   query   │  │   page    │  │ debounce  │  │   │
//! │  │   │  Catalog  │  │  Filter   │  │  Pager    │  │ Debounce  │  │   │
//! │  │   │  facets   │  │  Sort     │  │ PageView  │  │ newest    │  │   │
//! │  │   │           │  │  Suggest  │  │           │  │ wins      │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DOM • NO TIMERS • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, SortMode)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Catalog store with derived brand/category facets
//! - [`query`] - Filter predicate, sort modes, suggestions
//! - [`page`] - Pagination state and slicing
//! - [`debounce`] - Replace-on-submit scheduled task for search input
//! - [`seed`] - Static sample product table
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output (including the relevance
//!    sort, which is deterministic here - see [`query`])
//! 2. **No I/O**: Network, file system, and timer access is FORBIDDEN here;
//!    the debouncer takes `Instant` values from the caller
//! 3. **Integer Money**: All prices are in centavos (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use pecaaq_core::{seed, query, FilterState, SortMode};
//!
//! let catalog = seed::sample_catalog().unwrap();
//!
//! let mut filter = FilterState::new();
//! filter.set_query("filtro");
//!
//! let filtered = query::apply(&catalog, &filter, SortMode::PriceAsc);
//! assert_eq!(filtered.len(), 3);
//! assert_eq!(filtered[0].title, "Filtro de Óleo Fram");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod debounce;
pub mod error;
pub mod money;
pub mod page;
pub mod query;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pecaaq_core::Catalog` instead of
// `use pecaaq_core::catalog::Catalog`

pub use catalog::Catalog;
pub use debounce::Debounce;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use page::{PageView, Pager};
pub use query::FilterState;
pub use types::{Product, SortMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of products shown per page.
///
/// ## Why a constant?
/// The grid layout is designed around 8 cards (two rows of four). Total page
/// count and slicing both derive from this value, so it lives in one place.
pub const PAGE_SIZE: usize = 8;

/// Maximum number of autocomplete suggestions returned for a query.
pub const SUGGESTION_LIMIT: usize = 6;

/// Delay applied to free-text search input before the pipeline recomputes.
///
/// ## Business Reason
/// Only the last keystroke within this window triggers filtering and
/// suggestion work, so fast typists don't recompute on every key.
pub const SEARCH_DEBOUNCE_MS: u64 = 220;

/// How many brand checkboxes the render layer shows before "show more".
///
/// This is a display cap only - it never restricts the filter itself.
pub const BRAND_DISPLAY_LIMIT: usize = 5;

/// Maximum accepted length for a free-text search query.
pub const MAX_QUERY_LEN: usize = 100;
