//! # Domain Types
//!
//! Core domain types for the PeçaAq catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │    SortMode     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id (u32)       │   │  PriceAsc       │                             │
//! │  │  title          │   │  PriceDesc      │                             │
//! │  │  brand          │   │  Recent         │                             │
//! │  │  category       │   │  Relevance      │                             │
//! │  │  price_centavos │   │  Default        │                             │
//! │  │  parcels        │   └─────────────────┘                             │
//! │  │  opportunity    │                                                   │
//! │  │  added_at       │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier. The load contract rejects duplicates.
    pub id: u32,

    /// Display title shown on the product card.
    pub title: String,

    /// Manufacturer brand ("Bosch", "Fram", ...). Facet value.
    pub brand: String,

    /// Part category ("Filtro", "Freios", ...). Facet value.
    pub category: String,

    /// Price in centavos (smallest currency unit). Never negative.
    pub price_centavos: i64,

    /// Vehicle model the part fits ("Civic 2010", "Universal", ...).
    pub model: String,

    /// Reference path to the card image.
    pub image: String,

    /// Installment count for the price display. Always >= 1 (load contract:
    /// it is the divisor in the installment line).
    pub parcels: u32,

    /// Marks the product as a featured/discounted deal.
    pub opportunity: bool,

    /// When the product entered the catalog. Assigned monotonically at
    /// creation; drives the "recent" sort.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_centavos(self.price_centavos)
    }

    /// Returns the per-installment price for the card display.
    #[inline]
    pub fn installment_price(&self) -> Money {
        self.price().installment(self.parcels)
    }

    /// The lowercase text the search predicate runs against.
    ///
    /// Space-joined concatenation of title, brand, model, category - the
    /// same haystack is used for filtering and for suggestions, so both
    /// features always agree on what matches.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title, self.brand, self.model, self.category
        )
        .to_lowercase()
    }

    /// Substring match against the haystack.
    ///
    /// `query` must already be lowercased (see
    /// [`validation::validate_search_query`](crate::validation::validate_search_query)).
    /// No tokenization, no fuzzy matching.
    pub fn matches(&self, query: &str) -> bool {
        self.haystack().contains(query)
    }
}

// =============================================================================
// Sort Mode
// =============================================================================

/// How the filtered result set is ordered.
///
/// Wire form matches the sort select's option values (`price-asc` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Ascending by price.
    PriceAsc,
    /// Descending by price.
    PriceDesc,
    /// Newest first (descending `added_at`).
    Recent,
    /// Deterministic query-match quality ranking (see [`crate::query`]).
    Relevance,
    /// No explicit sort: catalog order.
    Default,
}

impl Default for SortMode {
    fn default() -> Self {
        SortMode::Default
    }
}

impl SortMode {
    /// The wire/key form of this mode (`"price-asc"` etc.).
    pub const fn key(&self) -> &'static str {
        match self {
            SortMode::PriceAsc => "price-asc",
            SortMode::PriceDesc => "price-desc",
            SortMode::Recent => "recent",
            SortMode::Relevance => "relevance",
            SortMode::Default => "default",
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortMode::PriceAsc),
            "price-desc" => Ok(SortMode::PriceDesc),
            "recent" => Ok(SortMode::Recent),
            "relevance" => Ok(SortMode::Relevance),
            "default" => Ok(SortMode::Default),
            _ => Err(()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: 1,
            title: "Filtro de Ar Honda Civic 2010".to_string(),
            brand: "Honda".to_string(),
            category: "Filtro".to_string(),
            price_centavos: 12000,
            model: "Civic 2010".to_string(),
            image: "img/FiltrodeArHondaCivi2010.jpg".to_string(),
            parcels: 3,
            opportunity: true,
            added_at: Utc::now(),
        }
    }

    #[test]
    fn test_haystack_is_lowercased_concatenation() {
        let p = sample();
        assert_eq!(
            p.haystack(),
            "filtro de ar honda civic 2010 honda civic 2010 filtro"
        );
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let p = sample();
        assert!(p.matches("filtro"));
        assert!(p.matches("honda civ"));
        assert!(p.matches("")); // empty query matches everything
        assert!(!p.matches("bosch"));
    }

    #[test]
    fn test_installment_price() {
        let p = sample();
        assert_eq!(p.installment_price().centavos(), 4000); // 3x R$ 40,00
    }

    #[test]
    fn test_sort_mode_round_trip() {
        for mode in [
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::Recent,
            SortMode::Relevance,
            SortMode::Default,
        ] {
            assert_eq!(mode.key().parse::<SortMode>(), Ok(mode));
        }
        assert!("price".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_sort_mode_serde_kebab_case() {
        let json = serde_json::to_string(&SortMode::PriceAsc).unwrap();
        assert_eq!(json, "\"price-asc\"");
    }
}
