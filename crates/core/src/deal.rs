//! Deal records and the create payload.
//!
//! [`Deal`] is what the store holds and the API returns. [`CreateDeal`] is
//! what clients send: it has no `id` or `created_at`, so any such keys in a
//! request body are skipped during deserialization and the store assigns
//! both.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::geo::GeoPoint;
use crate::types::{DealId, Timestamp};

/// Entity name used in not-found errors.
pub const DEAL_ENTITY: &str = "Deal";

/// A discount offer at a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: DealId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub store_name: String,
    pub location: GeoPoint,
    pub created_at: Timestamp,
    pub expires_at: Option<Timestamp>,
    pub category: String,
    pub image_url: Option<String>,
}

/// Payload for creating a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CreateDeal {
    #[validate(length(min = 3, max = 100, message = "must be 3 to 100 characters"))]
    pub title: String,
    #[validate(length(min = 10, max = 500, message = "must be 10 to 500 characters"))]
    pub description: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub price: f64,
    #[validate(length(min = 2, max = 100, message = "must be 2 to 100 characters"))]
    pub store_name: String,
    #[validate(nested)]
    pub location: GeoPoint,
    pub expires_at: Option<Timestamp>,
    #[validate(length(min = 2, max = 50, message = "must be 2 to 50 characters"))]
    pub category: String,
    /// Stored as given; not checked for URL syntax.
    pub image_url: Option<String>,
}

impl CreateDeal {
    /// Run the field constraints, collecting every violation.
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }

    /// Turn the payload into a stored record with the given identity.
    pub fn into_deal(self, id: DealId, created_at: Timestamp) -> Deal {
        Deal {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            store_name: self.store_name,
            location: self.location,
            created_at,
            expires_at: self.expires_at,
            category: self.category,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn valid_payload() -> CreateDeal {
        CreateDeal {
            title: "Half-price bagels".into(),
            description: "Every bagel is half off before 9am".into(),
            price: 4.5,
            store_name: "Bagel Barn".into(),
            location: GeoPoint::new(37.7749, -122.4194),
            expires_at: None,
            category: "Bakery".into(),
            image_url: None,
        }
    }

    fn violated_fields(payload: &CreateDeal) -> Vec<String> {
        match payload.check() {
            Err(CoreError::InvalidFields(violations)) => {
                violations.into_iter().map(|v| v.field).collect()
            }
            other => panic!("expected InvalidFields, got {other:?}"),
        }
    }

    #[test]
    fn valid_payload_passes() {
        assert_matches!(valid_payload().check(), Ok(()));
    }

    #[test]
    fn title_length_bounds() {
        let mut payload = valid_payload();
        payload.title = "ab".into();
        assert_eq!(violated_fields(&payload), vec!["title"]);

        payload.title = "abc".into();
        assert_matches!(payload.check(), Ok(()));

        payload.title = "x".repeat(101);
        assert_eq!(violated_fields(&payload), vec!["title"]);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let mut payload = valid_payload();
        // Three characters, nine bytes.
        payload.title = "äöü".into();
        assert_matches!(payload.check(), Ok(()));
    }

    #[test]
    fn price_must_be_strictly_positive() {
        let mut payload = valid_payload();
        payload.price = 0.0;
        assert_eq!(violated_fields(&payload), vec!["price"]);

        payload.price = -1.0;
        assert_eq!(violated_fields(&payload), vec!["price"]);
    }

    #[test]
    fn every_violation_is_reported() {
        let payload = CreateDeal {
            title: "a".into(),
            description: "short".into(),
            price: 0.0,
            store_name: "x".into(),
            location: GeoPoint::new(100.0, 200.0),
            expires_at: None,
            category: "c".into(),
            image_url: None,
        };

        assert_eq!(
            violated_fields(&payload),
            vec![
                "category",
                "description",
                "location.lat",
                "location.lng",
                "price",
                "store_name",
                "title",
            ]
        );
    }

    #[test]
    fn id_and_created_at_in_body_are_ignored() {
        let body = serde_json::json!({
            "id": "999",
            "created_at": "1999-01-01T00:00:00Z",
            "title": "Half-price bagels",
            "description": "Every bagel is half off before 9am",
            "price": 4.5,
            "store_name": "Bagel Barn",
            "location": {"lat": 37.7749, "lng": -122.4194},
            "category": "Bakery"
        });

        let payload: CreateDeal = serde_json::from_value(body).unwrap();
        assert_eq!(payload, valid_payload());
    }

    #[test]
    fn into_deal_keeps_payload_fields() {
        let now = Utc::now();
        let deal = valid_payload().into_deal("7".into(), now);

        assert_eq!(deal.id, "7");
        assert_eq!(deal.created_at, now);
        assert_eq!(deal.title, "Half-price bagels");
        assert_eq!(deal.location, GeoPoint::new(37.7749, -122.4194));
    }
}
