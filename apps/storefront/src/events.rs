//! # Input Surface
//!
//! The discrete events the input surface delivers to the storefront. Each
//! carries the full new value of the piece of state it changes (the checked
//! set, not a delta), so the filter state can be rebuilt rather than
//! patched.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pecaaq_core::SortMode;

/// A discrete input event from the page.
///
/// Events in the first group trigger a full filter+sort recomputation
/// (resetting to page 1); `NextPage`/`PrevPage` only re-slice; the
/// remaining ones touch display or cart state.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum InputEvent {
    /// Free-text query changed. Debounced: only the last keystroke within
    /// the window reaches the pipeline.
    QueryChanged(String),

    /// A suggestion was picked. Carries the product's exact title; applied
    /// immediately (supersedes any pending debounced query).
    SuggestionPicked(String),

    /// The checked brand set changed.
    BrandsChanged(BTreeSet<String>),

    /// The checked category set changed.
    CategoriesChanged(BTreeSet<String>),

    /// The "opportunities only" checkbox toggled.
    OpportunityToggled(bool),

    /// The price "apply" button was pressed. Raw field text; malformed
    /// values degrade to the unrestricted bound.
    PriceRangeApplied { min: String, max: String },

    /// The sort select changed.
    SortChanged(SortMode),

    /// "Next" page navigation.
    NextPage,

    /// "Previous" page navigation.
    PrevPage,

    /// The "show more / show less" brands toggle. Display cap only, not a
    /// filter concern.
    ToggleBrandList,

    /// A product card's buy button. Appends to the cart.
    #[serde(rename_all = "camelCase")]
    AddToCart { product_id: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_round_trip_through_json() {
        let event = InputEvent::PriceRangeApplied {
            min: "200".to_string(),
            max: "300,50".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: InputEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, InputEvent::PriceRangeApplied { .. }));

        let event = InputEvent::SortChanged(SortMode::PriceAsc);
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("price-asc"));
    }
}
