//! # Sample Seed Data
//!
//! The static product table the storefront ships with. In a future version
//! this is replaced by a dynamic loader; the [`Catalog::load`] contract is
//! already written for that.
//!
//! The `added_at` offsets descend with id, so under the "recent" sort the
//! products come out in id order (id 1 newest, id 10 oldest).

use chrono::{Duration, Utc};

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::types::Product;

/// One seed row. Keeps the table below compact.
#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    title: &str,
    brand: &str,
    category: &str,
    price_centavos: i64,
    model: &str,
    image: &str,
    parcels: u32,
    opportunity: bool,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        brand: brand.to_string(),
        category: category.to_string(),
        price_centavos,
        model: model.to_string(),
        image: image.to_string(),
        parcels,
        opportunity,
        // Staggered by id: lower id = added more recently
        added_at: Utc::now() - Duration::milliseconds(id as i64 * 1_000_000),
    }
}

/// The 10 sample products.
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Filtro de Ar Honda Civic 2010",
            "Honda",
            "Filtro",
            12000,
            "Civic 2010",
            "img/FiltrodeArHondaCivi2010.jpg",
            3,
            true,
        ),
        product(
            2,
            "Pastilha de Freio Bosch - Gol 2015",
            "Bosch",
            "Freios",
            25050,
            "Gol 2015",
            "img/PastilhaFreioBoschGol2015.jpg",
            5,
            false,
        ),
        product(
            3,
            "Óleo Lubrificante Shell 5W30",
            "Shell",
            "Óleo",
            9590,
            "Universal",
            "img/OleoLubrificanteShell5W30.jpg",
            2,
            true,
        ),
        product(
            4,
            "Bateria Moura 60Ah",
            "Moura",
            "Bateria",
            48000,
            "Universal",
            "img/BateriaMoura60Ah.jpg",
            6,
            false,
        ),
        product(
            5,
            "Filtro de Óleo Fram",
            "Fram",
            "Filtro",
            4530,
            "Universal",
            "img/FiltrodeOleoFram.jpg",
            1,
            false,
        ),
        product(
            6,
            "Velas NGK Platinum",
            "NGK",
            "Velas",
            7880,
            "Universal",
            "img/VelasNGKPlatinum.jpg",
            3,
            true,
        ),
        product(
            7,
            "Correia Dentada Gates",
            "Gates",
            "Correia",
            15000,
            "Universal",
            "img/CorreiaDentadaGates.jpg",
            4,
            false,
        ),
        product(
            8,
            "Amortecedor Monroe",
            "Monroe",
            "Suspensão",
            35000,
            "Universal",
            "img/AmortecedorMonroe.jpg",
            5,
            true,
        ),
        product(
            9,
            "Filtro de Combustível Fram",
            "Fram",
            "Filtro",
            6000,
            "Universal",
            "img/FiltrodeCombustivelFram.jpg",
            3,
            false,
        ),
        product(
            10,
            "Pastilha de Freio Bosch - Corolla 2016",
            "Bosch",
            "Freios",
            26000,
            "Corolla 2016",
            "img/PastilhadeFreioBosch-Corolla2016.jpg",
            5,
            true,
        ),
    ]
}

/// Loads the sample products into a catalog.
pub fn sample_catalog() -> CoreResult<Catalog> {
    Catalog::load(sample_products())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_loads() {
        let catalog = sample_catalog().unwrap();
        assert_eq!(catalog.len(), 10);
    }

    #[test]
    fn test_recency_descends_with_id() {
        let products = sample_products();
        for pair in products.windows(2) {
            assert!(pair[0].added_at > pair[1].added_at);
        }
    }

    #[test]
    fn test_opportunity_ids() {
        let ids: Vec<u32> = sample_products()
            .iter()
            .filter(|p| p.opportunity)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 6, 8, 10]);
    }
}
