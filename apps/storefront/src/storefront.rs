//! # Storefront State Object
//!
//! The single owner of all page state: catalog, filter selections, sort
//! mode, pagination cursor, cart, search debouncer, and the brand-list
//! expansion flag. Every input event flows through [`Storefront::handle`],
//! which applies exactly one of two transitions:
//!
//! - **apply full filter+sort** (any filter or sort input): re-runs the
//!   pipeline over the whole catalog, resets to page 1, re-renders
//! - **re-slice** (page navigation only): keeps the cached filtered list
//!   and moves the page cursor, clamped
//!
//! The cached `filtered` list is always a pure function of
//! (catalog, filter, sort) - it is recomputed whole on each change, never
//! patched.

use std::time::Instant;

use tracing::debug;

use pecaaq_core::{query, validation, Catalog, Debounce, FilterState, PageView, Pager, Product, SortMode};

use crate::cart::Cart;
use crate::error::AppError;
use crate::events::InputEvent;
use crate::render::{FacetsView, ProductPage, RenderSink};

/// All mutable page state, as one explicit object.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    filter: FilterState,
    sort: SortMode,
    pager: Pager,
    cart: Cart,
    search_debounce: Debounce<String>,
    brands_expanded: bool,
    /// Cached pipeline output; replaced whole on every filter/sort change.
    filtered: Vec<Product>,
}

impl Storefront {
    /// Creates a storefront over a loaded catalog, with an unrestricted
    /// filter and default sort.
    pub fn new(catalog: Catalog) -> Self {
        let filter = FilterState::new();
        let sort = SortMode::default();
        let filtered = query::apply(&catalog, &filter, sort);
        Storefront {
            catalog,
            filter,
            sort,
            pager: Pager::new(),
            cart: Cart::new(),
            search_debounce: Debounce::search(),
            brands_expanded: false,
            filtered,
        }
    }

    /// Renders the full initial page: facets, first product page, cart badge.
    pub fn render_initial(&self, sink: &mut dyn RenderSink) {
        self.emit_facets(sink);
        self.emit_page(sink);
        sink.render_cart_count(self.cart.count());
    }

    /// Applies one input event.
    ///
    /// `now` anchors the search debouncer; pass `Instant::now()` outside of
    /// tests. Note that a `QueryChanged` event does NOT recompute here - it
    /// only (re)arms the debouncer, and the recomputation happens when
    /// [`poll_search`](Self::poll_search) fires.
    pub fn handle(
        &mut self,
        event: InputEvent,
        now: Instant,
        sink: &mut dyn RenderSink,
    ) -> Result<(), AppError> {
        match event {
            InputEvent::QueryChanged(raw) => {
                let normalized = validation::validate_search_query(&raw)
                    .map_err(|e| AppError::validation(e.to_string()))?;
                debug!(query = %normalized, "query debounced");
                self.search_debounce.submit(normalized, now);
            }

            InputEvent::SuggestionPicked(title) => {
                debug!(title = %title, "suggestion picked");
                // The pick supersedes whatever was still pending
                self.search_debounce.cancel();
                self.filter.set_query(&title);
                self.refilter();
                sink.render_suggestions(&[]);
                self.emit_page(sink);
            }

            InputEvent::BrandsChanged(brands) => {
                debug!(count = brands.len(), "brand selection changed");
                self.filter.brands = brands;
                self.refilter();
                self.emit_page(sink);
            }

            InputEvent::CategoriesChanged(categories) => {
                debug!(count = categories.len(), "category selection changed");
                self.filter.categories = categories;
                self.refilter();
                self.emit_page(sink);
            }

            InputEvent::OpportunityToggled(only) => {
                debug!(opportunity_only = only, "opportunity filter toggled");
                self.filter.opportunity_only = only;
                self.refilter();
                self.emit_page(sink);
            }

            InputEvent::PriceRangeApplied { min, max } => {
                // Permissive: junk in either field = unrestricted bound
                self.filter.min_price = validation::parse_price_input(&min);
                self.filter.max_price = validation::parse_price_input(&max);
                debug!(
                    min = ?self.filter.min_price,
                    max = ?self.filter.max_price,
                    "price range applied"
                );
                self.refilter();
                self.emit_page(sink);
            }

            InputEvent::SortChanged(mode) => {
                debug!(sort = mode.key(), "sort changed");
                self.sort = mode;
                self.refilter();
                self.emit_page(sink);
            }

            InputEvent::NextPage => {
                // Re-slice only; never re-filters
                if self.pager.next(self.filtered.len()) {
                    self.emit_page(sink);
                }
            }

            InputEvent::PrevPage => {
                if self.pager.prev() {
                    self.emit_page(sink);
                }
            }

            InputEvent::ToggleBrandList => {
                self.brands_expanded = !self.brands_expanded;
                debug!(expanded = self.brands_expanded, "brand list toggled");
                self.emit_facets(sink);
            }

            InputEvent::AddToCart { product_id } => {
                let product = self
                    .catalog
                    .get(product_id)
                    .ok_or_else(|| AppError::not_found("Product", product_id))?
                    .clone();
                debug!(product_id, title = %product.title, "added to cart");
                self.cart.add(product);
                sink.render_cart_count(self.cart.count());
            }
        }

        Ok(())
    }

    /// Fires the search debouncer if its deadline has passed: renders the
    /// suggestions for the fired query, then runs the full pipeline pass.
    ///
    /// Returns whether a pending query fired.
    pub fn poll_search(&mut self, now: Instant, sink: &mut dyn RenderSink) -> bool {
        let Some(query) = self.search_debounce.fire(now) else {
            return false;
        };
        debug!(query = %query, "search fired");

        let titles: Vec<String> = query::suggestions(&self.catalog, &query)
            .iter()
            .map(|p| p.title.clone())
            .collect();
        sink.render_suggestions(&titles);

        self.filter.query = query;
        self.refilter();
        self.emit_page(sink);
        true
    }

    /// Deadline of the pending search, if any. Lets the shell sleep just
    /// long enough before polling.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.search_debounce.deadline()
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// The "apply full filter+sort" transition: recompute and reset to
    /// page 1.
    fn refilter(&mut self) {
        self.filtered = query::apply(&self.catalog, &self.filter, self.sort);
        self.pager.reset();
    }

    fn emit_page(&self, sink: &mut dyn RenderSink) {
        let view = self.pager.slice(&self.filtered);
        sink.render_page(&ProductPage::from(&view));
    }

    fn emit_facets(&self, sink: &mut dyn RenderSink) {
        let facets = FacetsView::build(
            self.catalog.brands(),
            self.catalog.categories(),
            self.brands_expanded,
        );
        sink.render_facets(&facets);
    }

    // =========================================================================
    // Accessors (used by the shell and by tests)
    // =========================================================================

    /// The current filtered result, in result order.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// The current page slice.
    pub fn page_view(&self) -> PageView {
        self.pager.slice(&self.filtered)
    }

    /// Current 1-based page number.
    pub fn current_page(&self) -> usize {
        self.pager.current_page()
    }

    /// Cart badge count.
    pub fn cart_count(&self) -> usize {
        self.cart.count()
    }

    /// The active filter state.
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// The active sort mode.
    pub fn sort(&self) -> SortMode {
        self.sort
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pecaaq_core::seed;
    use std::collections::BTreeSet;
    use std::time::Duration;

    /// Records everything pushed into it, so tests can assert on the exact
    /// data the render layer would receive.
    #[derive(Default)]
    struct RecordingSink {
        pages: Vec<ProductPage>,
        suggestions: Vec<Vec<String>>,
        cart_counts: Vec<usize>,
        facets: Vec<FacetsView>,
    }

    impl RenderSink for RecordingSink {
        fn render_page(&mut self, page: &ProductPage) {
            self.pages.push(page.clone());
        }
        fn render_facets(&mut self, facets: &FacetsView) {
            self.facets.push(facets.clone());
        }
        fn render_suggestions(&mut self, titles: &[String]) {
            self.suggestions.push(titles.to_vec());
        }
        fn render_cart_count(&mut self, count: usize) {
            self.cart_counts.push(count);
        }
    }

    fn storefront() -> Storefront {
        Storefront::new(seed::sample_catalog().unwrap())
    }

    const DEBOUNCE: Duration = Duration::from_millis(220);

    #[test]
    fn test_initial_state_shows_whole_catalog() {
        let store = storefront();
        assert_eq!(store.filtered().len(), 10);
        assert_eq!(store.current_page(), 1);

        let view = store.page_view();
        assert_eq!(view.items.len(), 8);
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_debounced_search_newest_wins() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let t0 = Instant::now();

        store
            .handle(InputEvent::QueryChanged("fil".to_string()), t0, &mut sink)
            .unwrap();
        store
            .handle(
                InputEvent::QueryChanged("Filtro".to_string()),
                t0 + Duration::from_millis(100),
                &mut sink,
            )
            .unwrap();

        // Nothing recomputed yet, and the first deadline was replaced
        assert_eq!(store.filtered().len(), 10);
        assert!(!store.poll_search(t0 + DEBOUNCE, &mut sink));

        // After the re-armed deadline the LAST query fires, normalized
        assert!(store.poll_search(t0 + Duration::from_millis(100) + DEBOUNCE, &mut sink));
        assert_eq!(store.filter().query, "filtro");
        assert_eq!(store.filtered().len(), 3);
        assert_eq!(store.current_page(), 1);

        // Suggestions were rendered for the fired query
        let last_suggestions = sink.suggestions.last().unwrap();
        assert_eq!(last_suggestions.len(), 3);
        assert_eq!(last_suggestions[0], "Filtro de Ar Honda Civic 2010");
    }

    #[test]
    fn test_suggestion_pick_applies_exact_title_immediately() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let t0 = Instant::now();

        // A half-typed query is still pending when the pick arrives
        store
            .handle(InputEvent::QueryChanged("fil".to_string()), t0, &mut sink)
            .unwrap();
        store
            .handle(
                InputEvent::SuggestionPicked("Filtro de Óleo Fram".to_string()),
                t0,
                &mut sink,
            )
            .unwrap();

        assert_eq!(store.filter().query, "filtro de óleo fram");
        assert_eq!(store.filtered().len(), 1);

        // The pending "fil" was cancelled, not queued behind the pick
        assert!(!store.poll_search(t0 + DEBOUNCE, &mut sink));
        assert_eq!(store.filtered().len(), 1);

        // Suggestion list was hidden on pick
        assert_eq!(sink.suggestions.last().unwrap().len(), 0);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store.handle(InputEvent::NextPage, now, &mut sink).unwrap();
        assert_eq!(store.current_page(), 2);

        store
            .handle(InputEvent::OpportunityToggled(true), now, &mut sink)
            .unwrap();
        assert_eq!(store.current_page(), 1);
        let ids: Vec<u32> = store.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3, 6, 8, 10]);
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store.handle(InputEvent::NextPage, now, &mut sink).unwrap();
        assert_eq!(store.current_page(), 2);

        store
            .handle(
                InputEvent::SortChanged(SortMode::PriceAsc),
                now,
                &mut sink,
            )
            .unwrap();
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.filtered()[0].price_centavos, 4530);
    }

    #[test]
    fn test_page_navigation_reslices_without_refiltering() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store.handle(InputEvent::NextPage, now, &mut sink).unwrap();
        let second = sink.pages.last().unwrap();
        assert_eq!(second.current_page, 2);
        assert_eq!(second.cards.len(), 2);
        assert_eq!(second.total_count, 10); // same filtered list

        // Past the last page: clamped, no render
        let renders = sink.pages.len();
        store.handle(InputEvent::NextPage, now, &mut sink).unwrap();
        assert_eq!(store.current_page(), 2);
        assert_eq!(sink.pages.len(), renders);

        store.handle(InputEvent::PrevPage, now, &mut sink).unwrap();
        assert_eq!(store.current_page(), 1);
    }

    #[test]
    fn test_brand_and_price_range_flow() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        let mut brands = BTreeSet::new();
        brands.insert("Bosch".to_string());
        store
            .handle(InputEvent::BrandsChanged(brands), now, &mut sink)
            .unwrap();
        store
            .handle(
                InputEvent::PriceRangeApplied {
                    min: "200".to_string(),
                    max: "300".to_string(),
                },
                now,
                &mut sink,
            )
            .unwrap();

        let ids: Vec<u32> = store.filtered().iter().map(|p| p.id).collect();
        assert_eq!(ids, [2, 10]);
    }

    #[test]
    fn test_negative_max_price_excludes_whole_catalog() {
        // A numeric-but-negative bound is applied as written, not discarded
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store
            .handle(
                InputEvent::PriceRangeApplied {
                    min: String::new(),
                    max: "-50".to_string(),
                },
                now,
                &mut sink,
            )
            .unwrap();

        assert_eq!(
            store.filter().max_price,
            Some(pecaaq_core::Money::from_centavos(-5000))
        );
        assert!(store.filtered().is_empty());
        assert_eq!(sink.pages.last().unwrap().total_count, 0);
    }

    #[test]
    fn test_malformed_price_degrades_to_unrestricted() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store
            .handle(
                InputEvent::PriceRangeApplied {
                    min: "abc".to_string(),
                    max: "".to_string(),
                },
                now,
                &mut sink,
            )
            .unwrap();

        assert!(store.filter().min_price.is_none());
        assert!(store.filter().max_price.is_none());
        assert_eq!(store.filtered().len(), 10);
    }

    #[test]
    fn test_add_to_cart_allows_duplicates() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store
            .handle(InputEvent::AddToCart { product_id: 1 }, now, &mut sink)
            .unwrap();
        store
            .handle(InputEvent::AddToCart { product_id: 1 }, now, &mut sink)
            .unwrap();

        assert_eq!(store.cart_count(), 2);
        assert_eq!(sink.cart_counts, [1, 2]);
    }

    #[test]
    fn test_add_to_cart_unknown_id_fails() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();

        let err = store
            .handle(
                InputEvent::AddToCart { product_id: 99 },
                Instant::now(),
                &mut sink,
            )
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotFound);
        assert_eq!(store.cart_count(), 0);
    }

    #[test]
    fn test_brand_list_toggle_only_touches_facets() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store
            .handle(InputEvent::ToggleBrandList, now, &mut sink)
            .unwrap();
        let facets = sink.facets.last().unwrap();
        assert!(facets.brands_expanded);
        assert_eq!(facets.brands.len(), 8);
        assert!(sink.pages.is_empty()); // no pipeline pass, no page render

        store
            .handle(InputEvent::ToggleBrandList, now, &mut sink)
            .unwrap();
        assert_eq!(sink.facets.last().unwrap().brands.len(), 5);
    }

    #[test]
    fn test_overlong_query_is_rejected() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();

        let err = store
            .handle(
                InputEvent::QueryChanged("x".repeat(200)),
                Instant::now(),
                &mut sink,
            )
            .unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let mut store = storefront();
        let mut sink = RecordingSink::default();
        let now = Instant::now();

        store
            .handle(InputEvent::SortChanged(SortMode::Recent), now, &mut sink)
            .unwrap();
        let first: Vec<u32> = store.filtered().iter().map(|p| p.id).collect();

        store
            .handle(InputEvent::SortChanged(SortMode::Recent), now, &mut sink)
            .unwrap();
        let second: Vec<u32> = store.filtered().iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }
}
