//! # Render Layer
//!
//! The render sink boundary: the storefront emits plain data (sequences
//! and counts), and whatever actually draws the page - a JS frontend, a
//! terminal, a test - implements [`RenderSink`].
//!
//! ## Why DTOs?
//! - Decouples the domain model from the render contract
//! - Pre-formats the money strings so every consumer shows identical prices
//! - serde camelCase + ts-rs keeps a JS frontend type-safe without manual
//!   sync

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use pecaaq_core::{PageView, Product, BRAND_DISPLAY_LIMIT};

// =============================================================================
// DTOs
// =============================================================================

/// One product card, with display strings pre-rendered.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: u32,
    pub title: String,
    pub brand: String,
    pub category: String,
    pub model: String,
    pub image: String,
    pub price_centavos: i64,
    /// "R$ 120,00"
    pub price_display: String,
    /// "Em até 3x R$ 40,00 sem juros"
    pub installments: String,
    pub opportunity: bool,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        ProductCard {
            id: p.id,
            title: p.title.clone(),
            brand: p.brand.clone(),
            category: p.category.clone(),
            model: p.model.clone(),
            image: p.image.clone(),
            price_centavos: p.price_centavos,
            price_display: p.price().to_string(),
            installments: format!(
                "Em até {}x {} sem juros",
                p.parcels,
                p.installment_price()
            ),
            opportunity: p.opportunity,
        }
    }
}

/// The product grid: current page of cards plus page metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub cards: Vec<ProductCard>,
    pub total_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
}

impl From<&PageView> for ProductPage {
    fn from(view: &PageView) -> Self {
        ProductPage {
            cards: view.items.iter().map(ProductCard::from).collect(),
            total_count: view.total_count,
            current_page: view.current_page,
            total_pages: view.total_pages,
        }
    }
}

/// The filter sidebar contents.
///
/// `brands` is already capped at [`BRAND_DISPLAY_LIMIT`] unless expanded;
/// `hidden_brand_count` tells the sink whether to show the toggle.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FacetsView {
    pub brands: Vec<String>,
    pub brands_expanded: bool,
    pub hidden_brand_count: usize,
    pub categories: Vec<String>,
}

impl FacetsView {
    /// Builds the sidebar view, applying the brand display cap.
    pub fn build(all_brands: &[String], categories: &[String], expanded: bool) -> Self {
        let limit = if expanded {
            all_brands.len()
        } else {
            BRAND_DISPLAY_LIMIT.min(all_brands.len())
        };
        FacetsView {
            brands: all_brands[..limit].to_vec(),
            brands_expanded: expanded,
            hidden_brand_count: all_brands.len() - limit,
            categories: categories.to_vec(),
        }
    }
}

// =============================================================================
// Render Sink
// =============================================================================

/// Where the storefront pushes its output. Implementations draw; the
/// storefront never emits markup.
pub trait RenderSink {
    /// The product grid changed (new filter result or new page slice).
    fn render_page(&mut self, page: &ProductPage);

    /// The filter sidebar changed (only on load and brand-list toggle -
    /// the facet sets themselves are fixed after catalog load).
    fn render_facets(&mut self, facets: &FacetsView);

    /// New autocomplete suggestions for the current query. Empty slice =
    /// hide the list.
    fn render_suggestions(&mut self, titles: &[String]);

    /// The cart badge count changed.
    fn render_cart_count(&mut self, count: usize);
}

// =============================================================================
// Text Renderer
// =============================================================================

/// A terminal renderer for the CLI shell. Also doubles as a readable
/// reference for what a real frontend receives.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        TextRenderer
    }
}

impl RenderSink for TextRenderer {
    fn render_page(&mut self, page: &ProductPage) {
        println!(
            "-- {} produtos | página {} / {}",
            page.total_count, page.current_page, page.total_pages
        );
        if page.cards.is_empty() {
            println!("   Nenhum produto encontrado");
            return;
        }
        for card in &page.cards {
            let tag = if card.opportunity { " [oportunidade]" } else { "" };
            println!(
                "   #{:<3} {} - {} ({}){}",
                card.id, card.title, card.price_display, card.installments, tag
            );
        }
    }

    fn render_facets(&mut self, facets: &FacetsView) {
        let more = if facets.hidden_brand_count > 0 {
            format!(" (+{} ocultas)", facets.hidden_brand_count)
        } else {
            String::new()
        };
        println!("-- Marcas: {}{}", facets.brands.join(", "), more);
        println!("-- Categorias: {}", facets.categories.join(", "));
    }

    fn render_suggestions(&mut self, titles: &[String]) {
        if titles.is_empty() {
            return;
        }
        println!("-- Sugestões:");
        for title in titles {
            println!("   {}", title);
        }
    }

    fn render_cart_count(&mut self, count: usize) {
        println!("-- Carrinho: {}", count);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pecaaq_core::seed;

    #[test]
    fn test_product_card_display_strings() {
        let products = seed::sample_products();
        let card = ProductCard::from(&products[0]); // Filtro de Ar, R$ 120,00, 3x

        assert_eq!(card.price_display, "R$ 120,00");
        assert_eq!(card.installments, "Em até 3x R$ 40,00 sem juros");
    }

    #[test]
    fn test_facets_view_caps_brands() {
        let catalog = seed::sample_catalog().unwrap();

        let collapsed = FacetsView::build(catalog.brands(), catalog.categories(), false);
        assert_eq!(collapsed.brands.len(), 5);
        assert_eq!(collapsed.hidden_brand_count, 3); // 8 brands total
        assert!(!collapsed.brands_expanded);

        let expanded = FacetsView::build(catalog.brands(), catalog.categories(), true);
        assert_eq!(expanded.brands.len(), 8);
        assert_eq!(expanded.hidden_brand_count, 0);
    }

    #[test]
    fn test_facets_view_with_fewer_brands_than_cap() {
        let brands = vec!["Bosch".to_string(), "Fram".to_string()];
        let view = FacetsView::build(&brands, &[], false);
        assert_eq!(view.brands.len(), 2);
        assert_eq!(view.hidden_brand_count, 0);
    }

    #[test]
    fn test_page_dto_serializes_camel_case() {
        let page = ProductPage {
            cards: Vec::new(),
            total_count: 0,
            current_page: 1,
            total_pages: 1,
        };
        let json = serde_json::to_string(&page).unwrap();
        assert!(json.contains("\"totalCount\":0"));
        assert!(json.contains("\"currentPage\":1"));
    }
}
