//! Integration tests for the in-memory deal store.
//!
//! Exercises the store through the `DealStore` trait object, the same way the
//! API holds it:
//! - Create then fetch by the assigned id
//! - Delete then fetch fails
//! - Insertion order and id stability across deletions
//! - Concurrent creates never share an id

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use dealmyarea_core::deal::CreateDeal;
use dealmyarea_core::geo::GeoPoint;
use dealmyarea_db::seed::seed_deals;
use dealmyarea_db::{DealStore, IdStrategy, InMemoryDealStore};

fn new_deal(title: &str, price: f64) -> CreateDeal {
    CreateDeal {
        title: title.to_string(),
        description: format!("{title} for a limited time"),
        price,
        store_name: "Corner Shop".to_string(),
        location: GeoPoint::new(40.7128, -74.0060),
        expires_at: None,
        category: "Misc".to_string(),
        image_url: Some("https://example.com/deal.png".to_string()),
    }
}

fn store(strategy: IdStrategy) -> Arc<dyn DealStore> {
    Arc::new(InMemoryDealStore::new(strategy))
}

#[test]
fn created_deal_is_found_by_its_id() {
    let store = store(IdStrategy::Sequential);
    let created = store.append(new_deal("Two for one", 3.0));

    assert!(!created.id.is_empty());
    assert_eq!(store.find_by_id(&created.id), Some(created));
}

#[test]
fn deleted_deal_is_gone() {
    let store = store(IdStrategy::Sequential);
    let created = store.append(new_deal("Two for one", 3.0));

    let removed = store.remove_by_id(&created.id).unwrap();
    assert_eq!(removed.id, created.id);
    assert_eq!(store.find_by_id(&created.id), None);
    assert_eq!(store.remove_by_id(&created.id), None);
    assert!(store.is_empty());
}

#[test]
fn list_preserves_insertion_order() {
    let store = store(IdStrategy::Uuid);
    let titles = ["First deal", "Second deal", "Third deal"];
    for (i, title) in titles.iter().enumerate() {
        store.append(new_deal(title, (i + 1) as f64));
    }

    let listed: Vec<String> = store.list().into_iter().map(|d| d.title).collect();
    assert_eq!(listed, titles);
}

#[test]
fn remove_keeps_order_of_the_rest() {
    let store = store(IdStrategy::Sequential);
    for deal in seed_deals() {
        store.append(deal);
    }

    store.remove_by_id("2");
    let ids: Vec<String> = store.list().into_iter().map(|d| d.id).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn sequential_ids_are_not_reused_after_delete() {
    let store = store(IdStrategy::Sequential);
    for deal in seed_deals() {
        store.append(deal);
    }
    store.remove_by_id("3");
    store.remove_by_id("1");

    // A count-based scheme would hand out "2" again here.
    let created = store.append(new_deal("Late arrival", 1.0));
    assert_eq!(created.id, "4");

    let ids: HashSet<String> = store.list().into_iter().map(|d| d.id).collect();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn list_is_a_snapshot() {
    let store = store(IdStrategy::Sequential);
    store.append(new_deal("Two for one", 3.0));

    let snapshot = store.list();
    store.append(new_deal("Three for two", 4.0));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    for strategy in [IdStrategy::Sequential, IdStrategy::Uuid] {
        let store = store(strategy);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..50)
                        .map(|i| store.append(new_deal(&format!("Deal {t}-{i}"), 1.0)).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<String> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(ids.len(), 400, "strategy={strategy}");
        assert_eq!(store.len(), 400);
    }
}
