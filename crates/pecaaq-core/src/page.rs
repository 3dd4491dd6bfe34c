//! # Pagination
//!
//! Explicit pagination state plus the slicing step at the end of the
//! pipeline.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Pagination Lifecycle                                 │
//! │                                                                         │
//! │  Any filter/sort input ──► Pager::reset() ──► current_page = 1         │
//! │                                                                         │
//! │  "Next" button ──────────► Pager::next(total) ──┐                      │
//! │  "Previous" button ──────► Pager::prev() ───────┤ clamped to           │
//! │                                                 │ [1, total_pages],    │
//! │                                                 │ silently             │
//! │                                                 ▼                      │
//! │  Navigation only RE-SLICES the cached filtered list - it never         │
//! │  re-runs the filter.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Pager` is an explicit state object handed to the pipeline rather than an
//! ambient page-global, so the whole flow stays testable as pure calls.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;
use crate::PAGE_SIZE;

// =============================================================================
// Pager
// =============================================================================

/// 1-based pagination cursor over a filtered result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pager {
    current: usize,
}

impl Pager {
    /// A pager positioned on page 1.
    pub fn new() -> Self {
        Pager { current: 1 }
    }

    /// The current page number (1-based).
    #[inline]
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// Total pages for a result of `total_count` items.
    ///
    /// Always at least 1: an empty result still has one (empty) page.
    pub fn total_pages(total_count: usize) -> usize {
        total_count.div_ceil(PAGE_SIZE).max(1)
    }

    /// Back to page 1. Called whenever the filter set or sort mode changes.
    pub fn reset(&mut self) {
        self.current = 1;
    }

    /// Advances one page if not already on the last page of a
    /// `total_count`-item result. Out-of-range requests are silently
    /// ignored, preserving the current page.
    ///
    /// Returns whether the page changed.
    pub fn next(&mut self, total_count: usize) -> bool {
        if self.current < Self::total_pages(total_count) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Retreats one page, stopping at page 1. Returns whether the page
    /// changed.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Slices the current page out of the filtered list.
    ///
    /// ## Example
    /// ```rust
    /// use pecaaq_core::{seed, Pager};
    ///
    /// let catalog = seed::sample_catalog().unwrap();
    /// let pager = Pager::new();
    /// let view = pager.slice(catalog.products());
    ///
    /// assert_eq!(view.items.len(), 8);  // first page of 10 products
    /// assert_eq!(view.total_pages, 2);
    /// ```
    pub fn slice(&self, filtered: &[Product]) -> PageView {
        let start = (self.current - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(filtered.len());
        let items = if start < filtered.len() {
            filtered[start..end].to_vec()
        } else {
            Vec::new()
        };

        PageView {
            items,
            total_count: filtered.len(),
            current_page: self.current,
            total_pages: Self::total_pages(filtered.len()),
        }
    }
}

impl Default for Pager {
    fn default() -> Self {
        Pager::new()
    }
}

// =============================================================================
// Page View
// =============================================================================

/// The visible slice plus the page metadata the render layer displays
/// ("{count} produtos", "{current} / {total}").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Products on the current page, in result order.
    pub items: Vec<Product>,

    /// Size of the whole filtered result, not just this page.
    pub total_count: usize,

    /// 1-based current page number.
    pub current_page: usize,

    /// Total page count (>= 1 even when the result is empty).
    pub total_pages: usize,
}

// =============================================================================
// Unit Tests
// =============================================================================
