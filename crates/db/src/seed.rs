//! Deals loaded at startup so a fresh server has something to show.

use dealmyarea_core::deal::CreateDeal;
use dealmyarea_core::geo::GeoPoint;

/// Where every seed deal is located (downtown San Francisco).
pub const SEED_LOCATION: GeoPoint = GeoPoint {
    lat: 37.7749,
    lng: -122.4194,
};

/// The three sample deals, in insertion order.
pub fn seed_deals() -> Vec<CreateDeal> {
    vec![
        seed(
            "50% off Groceries",
            "Get 50% off on all groceries at SuperMart",
            99.99,
            "SuperMart",
            "Groceries",
        ),
        seed(
            "Electronics Sale",
            "Big discounts on electronics",
            499.99,
            "TechZone",
            "Electronics",
        ),
        seed(
            "Fashion Week Sale",
            "Up to 70% off on all clothing",
            79.99,
            "Fashion Hub",
            "Clothing",
        ),
    ]
}

fn seed(title: &str, description: &str, price: f64, store_name: &str, category: &str) -> CreateDeal {
    CreateDeal {
        title: title.to_string(),
        description: description.to_string(),
        price,
        store_name: store_name.to_string(),
        location: SEED_LOCATION,
        expires_at: None,
        category: category.to_string(),
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_deals_satisfy_create_constraints() {
        for deal in seed_deals() {
            assert!(deal.check().is_ok(), "seed deal '{}' is invalid", deal.title);
        }
    }
}
