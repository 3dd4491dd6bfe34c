//! # Query Pipeline
//!
//! Pure transformation from (catalog, filter state, sort mode) to an
//! ordered result set, plus the suggestion matcher.
//!
//! ## Pipeline Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Query Pipeline                                      │
//! │                                                                         │
//! │  Catalog (immutable)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Filter: conjunction of five clauses                                   │
//! │    1. opportunity_only  → product.opportunity                          │
//! │    2. brands non-empty  → product.brand ∈ brands                       │
//! │    3. cats non-empty    → product.category ∈ categories                │
//! │    4. min ≤ price ≤ max (inclusive)                                    │
//! │    5. query non-empty   → haystack contains query                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Sort: price-asc | price-desc | recent | relevance | default           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> → Pager slices it into a PageView (see `page`)           │
//! │                                                                         │
//! │  Recomputed in full on every input change - the result is always a     │
//! │  pure function of its inputs, never incrementally maintained.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Relevance Is Deterministic Here
//! The page this reimplements shuffled results pseudo-randomly under
//! "relevance", so two renders of identical state disagreed. That breaks
//! the re-render idempotence the rest of the pipeline guarantees, and was
//! almost certainly unintended. Here `relevance` is a match-quality
//! ranking: title matches first, then matches found only in
//! brand/model/category, ties broken by earliest match offset and then by
//! catalog order. With no query it degrades to catalog order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::money::Money;
use crate::types::{Product, SortMode};
use crate::SUGGESTION_LIMIT;

// =============================================================================
// Filter State
// =============================================================================

/// The current filter selections, rebuilt from the input surface on each
/// change and fully replaced - never partially mutated mid-computation.
///
/// Every field's neutral value means "no restriction": empty query, empty
/// selection sets, unchecked opportunity flag, unset price bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Free-text query, stored trimmed and lowercased.
    pub query: String,

    /// Selected brand values. Empty = all brands pass.
    pub brands: BTreeSet<String>,

    /// Selected category values. Empty = all categories pass.
    pub categories: BTreeSet<String>,

    /// Restrict to featured/discounted deals.
    pub opportunity_only: bool,

    /// Inclusive lower price bound. `None` = 0.
    pub min_price: Option<Money>,

    /// Inclusive upper price bound. `None` = unbounded.
    pub max_price: Option<Money>,
}

impl FilterState {
    /// An unrestricted filter (everything passes).
    pub fn new() -> Self {
        FilterState::default()
    }

    /// Sets the free-text query, normalizing to the trimmed lowercase form
    /// the predicate expects.
    pub fn set_query(&mut self, raw: &str) {
        self.query = raw.trim().to_lowercase();
    }

    /// True iff the product passes all five clauses.
    ///
    /// The clauses are a commutative conjunction - evaluation order is an
    /// implementation detail, not a semantic one.
    pub fn matches(&self, product: &Product) -> bool {
        if self.opportunity_only && !product.opportunity {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        let price = product.price();
        let min = self.min_price.unwrap_or_else(Money::zero);
        if price < min {
            return false;
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }

        if !self.query.is_empty() && !product.matches(&self.query) {
            return false;
        }

        true
    }
}

// =============================================================================
// Filter + Sort
// =============================================================================

/// Runs the full filter + sort pass over the catalog.
///
/// Returns owned clones in result order; the catalog itself is never
/// reordered. All sorts are stable, so ties keep their pre-sort
/// (catalog-relative) order.
///
/// ## Example
/// ```rust
/// use pecaaq_core::{query, seed, FilterState, SortMode};
///
/// let catalog = seed::sample_catalog().unwrap();
/// let mut filter = FilterState::new();
/// filter.set_query("filtro");
///
/// let result = query::apply(&catalog, &filter, SortMode::PriceAsc);
/// let titles: Vec<&str> = result.iter().map(|p| p.title.as_str()).collect();
/// assert_eq!(
///     titles,
///     [
///         "Filtro de Óleo Fram",
///         "Filtro de Combustível Fram",
///         "Filtro de Ar Honda Civic 2010",
///     ]
/// );
/// ```
pub fn apply(catalog: &Catalog, filter: &FilterState, sort: SortMode) -> Vec<Product> {
    let mut result: Vec<Product> = catalog
        .products()
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        SortMode::PriceAsc => result.sort_by_key(|p| p.price_centavos),
        SortMode::PriceDesc => result.sort_by_key(|p| std::cmp::Reverse(p.price_centavos)),
        SortMode::Recent => result.sort_by_key(|p| std::cmp::Reverse(p.added_at)),
        SortMode::Relevance => {
            if !filter.query.is_empty() {
                let query = filter.query.as_str();
                result.sort_by_key(|p| relevance_rank(p, query));
            }
            // No query: nothing to rank by, keep catalog order
        }
        SortMode::Default => {} // catalog order
    }

    result
}

/// Match-quality key for the relevance sort. Lower sorts first.
///
/// Title matches outrank matches that only appear in brand/model/category;
/// within a tier, an earlier match offset wins. The final catalog-order
/// tiebreak comes from sort stability.
fn relevance_rank(product: &Product, query: &str) -> (u8, usize) {
    if let Some(offset) = product.title.to_lowercase().find(query) {
        return (0, offset);
    }
    if let Some(offset) = product.haystack().find(query) {
        return (1, offset);
    }
    // Unreachable after filtering, but a non-matching product simply
    // ranks last rather than panicking.
    (2, usize::MAX)
}

// =============================================================================
// Suggestions
// =============================================================================

/// Autocomplete suggestions for a raw query.
///
/// Same substring rule as the filter predicate, over the whole catalog in
/// catalog order, capped at [`SUGGESTION_LIMIT`]. An empty (or
/// whitespace-only) query produces no suggestions.
///
/// Picking a suggestion is the caller's concern: it sets the query to the
/// suggested product's exact title and triggers a fresh pipeline pass.
pub fn suggestions<'a>(catalog: &'a Catalog, raw_query: &str) -> Vec<&'a Product> {
    let query = raw_query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    catalog
        .products()
        .iter()
        .filter(|p| p.matches(&query))
        .take(SUGGESTION_LIMIT)
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn catalog() -> Catalog {
        seed::sample_catalog().unwrap()
    }

    fn titles(result: &[Product]) -> Vec<&str> {
        result.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_unrestricted_filter_passes_everything_in_catalog_order() {
        let catalog = catalog();
        let result = apply(&catalog, &FilterState::new(), SortMode::Default);
        assert_eq!(result.len(), 10);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_query_filtro_matches_three_products() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("filtro");

        let result = apply(&catalog, &filter, SortMode::Default);
        assert_eq!(
            titles(&result),
            [
                "Filtro de Ar Honda Civic 2010",
                "Filtro de Óleo Fram",
                "Filtro de Combustível Fram",
            ]
        );
    }

    #[test]
    fn test_query_filtro_price_asc_ordering() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("filtro");

        let result = apply(&catalog, &filter, SortMode::PriceAsc);
        let prices: Vec<i64> = result.iter().map(|p| p.price_centavos).collect();
        assert_eq!(prices, [4530, 6000, 12000]);
        assert_eq!(result[0].title, "Filtro de Óleo Fram");
    }

    #[test]
    fn test_brand_and_price_range_combination() {
        // Bosch, 200 <= price <= 300 → the two brake pads
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.brands.insert("Bosch".to_string());
        filter.min_price = Some(Money::from_reais(200, 0));
        filter.max_price = Some(Money::from_reais(300, 0));

        let result = apply(&catalog, &filter, SortMode::Default);
        assert_eq!(
            titles(&result),
            [
                "Pastilha de Freio Bosch - Gol 2015",
                "Pastilha de Freio Bosch - Corolla 2016",
            ]
        );
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        // Exactly the Gol pad's price on both ends
        filter.min_price = Some(Money::from_centavos(25050));
        filter.max_price = Some(Money::from_centavos(25050));

        let result = apply(&catalog, &filter, SortMode::Default);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 2);
    }

    #[test]
    fn test_opportunity_only_filter() {
        let catalog = catalog();
        let filter = FilterState {
            opportunity_only: true,
            ..FilterState::new()
        };

        let result = apply(&catalog, &filter, SortMode::Default);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3, 6, 8, 10]);
    }

    #[test]
    fn test_every_result_satisfies_all_clauses() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("fram");
        filter.categories.insert("Filtro".to_string());
        filter.max_price = Some(Money::from_reais(50, 0));
        filter.opportunity_only = false;

        let result = apply(&catalog, &filter, SortMode::Default);
        for p in &result {
            assert!(filter.matches(p));
        }
        // And everything excluded fails at least one clause
        let included: BTreeSet<u32> = result.iter().map(|p| p.id).collect();
        for p in catalog.products() {
            if !included.contains(&p.id) {
                assert!(!filter.matches(p));
            }
        }
    }

    #[test]
    fn test_empty_result_is_valid_not_an_error() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("inexistente");

        let result = apply(&catalog, &filter, SortMode::Default);
        assert!(result.is_empty());
    }

    #[test]
    fn test_price_desc_is_reverse_of_asc_for_distinct_prices() {
        // All sample prices are distinct, so desc must be the exact reverse
        let catalog = catalog();
        let filter = FilterState::new();

        let mut asc = apply(&catalog, &filter, SortMode::PriceAsc);
        let desc = apply(&catalog, &filter, SortMode::PriceDesc);
        asc.reverse();

        let asc_ids: Vec<u32> = asc.iter().map(|p| p.id).collect();
        let desc_ids: Vec<u32> = desc.iter().map(|p| p.id).collect();
        assert_eq!(asc_ids, desc_ids);
    }

    #[test]
    fn test_recent_sort_is_monotonic() {
        let catalog = catalog();
        let result = apply(&catalog, &FilterState::new(), SortMode::Recent);
        for pair in result.windows(2) {
            assert!(pair[0].added_at >= pair[1].added_at);
        }
        // Seed recency descends with id
        assert_eq!(result[0].id, 1);
        assert_eq!(result[9].id, 10);
    }

    #[test]
    fn test_relevance_is_deterministic() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("fram");

        let first = apply(&catalog, &filter, SortMode::Relevance);
        let second = apply(&catalog, &filter, SortMode::Relevance);
        let first_ids: Vec<u32> = first.iter().map(|p| p.id).collect();
        let second_ids: Vec<u32> = second.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_relevance_ranks_title_matches_first() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        // "bosch" appears in two titles; also in the brand of the same two
        // products. "honda" appears in one title and in the brand of id 1.
        filter.set_query("pastilha");

        let result = apply(&catalog, &filter, SortMode::Relevance);
        // Both matches are title matches at offset 0; catalog order breaks
        // the tie.
        assert_eq!(
            titles(&result),
            [
                "Pastilha de Freio Bosch - Gol 2015",
                "Pastilha de Freio Bosch - Corolla 2016",
            ]
        );
    }

    #[test]
    fn test_relevance_without_query_keeps_catalog_order() {
        let catalog = catalog();
        let result = apply(&catalog, &FilterState::new(), SortMode::Relevance);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_suggestions_empty_query() {
        let catalog = catalog();
        assert!(suggestions(&catalog, "").is_empty());
        assert!(suggestions(&catalog, "   ").is_empty());
    }

    #[test]
    fn test_suggestions_catalog_order_and_cap() {
        let catalog = catalog();

        let matches = suggestions(&catalog, "Filtro");
        let ids: Vec<u32> = matches.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 5, 9]);

        // "a" appears in every haystack; cap kicks in
        let broad = suggestions(&catalog, "a");
        assert_eq!(broad.len(), SUGGESTION_LIMIT);
        let broad_ids: Vec<u32> = broad.iter().map(|p| p.id).collect();
        assert_eq!(broad_ids, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let catalog = catalog();
        let mut filter = FilterState::new();
        filter.set_query("filtro");
        filter.max_price = Some(Money::from_reais(100, 0));

        let once = apply(&catalog, &filter, SortMode::Default);
        let twice = apply(&catalog, &filter, SortMode::Default);
        let once_ids: Vec<u32> = once.iter().map(|p| p.id).collect();
        let twice_ids: Vec<u32> = twice.iter().map(|p| p.id).collect();
        assert_eq!(once_ids, twice_ids);
    }
}
