//! The deal store: an ordered, in-memory collection of deals.
//!
//! Every operation is a linear scan. Records are never edited in place; the
//! only mutations are append and remove.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use dealmyarea_core::deal::{CreateDeal, Deal};

use crate::id::{IdGenerator, IdStrategy};
use crate::seed::seed_deals;

/// Storage operations the API needs. Shared across request handlers, so
/// implementations must be safe to call concurrently.
pub trait DealStore: Send + Sync {
    /// Assign an id and `created_at`, append to the end, return the stored record.
    fn append(&self, deal: CreateDeal) -> Deal;

    /// Snapshot of all deals in insertion order.
    fn list(&self) -> Vec<Deal>;

    /// First deal with the given id.
    fn find_by_id(&self, id: &str) -> Option<Deal>;

    /// Remove the first deal with the given id, returning it.
    fn remove_by_id(&self, id: &str) -> Option<Deal>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct Inner {
    deals: Vec<Deal>,
    ids: IdGenerator,
}

/// [`DealStore`] backed by a `Vec` behind one `RwLock`.
///
/// Id assignment and the push happen under the same write guard, so
/// concurrent creates cannot be handed the same id.
#[derive(Debug)]
pub struct InMemoryDealStore {
    strategy: IdStrategy,
    inner: RwLock<Inner>,
}

impl InMemoryDealStore {
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            inner: RwLock::new(Inner {
                deals: Vec::new(),
                ids: IdGenerator::new(strategy),
            }),
        }
    }

    /// A store pre-loaded with [`seed_deals`].
    pub fn seeded(strategy: IdStrategy) -> Self {
        let store = Self::new(strategy);
        for deal in seed_deals() {
            store.append(deal);
        }
        store
    }

    pub fn strategy(&self) -> IdStrategy {
        self.strategy
    }

    // A panic while holding the lock cannot leave the vector half-updated
    // (each mutation is a single push or remove), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryDealStore {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}

impl DealStore for InMemoryDealStore {
    fn append(&self, deal: CreateDeal) -> Deal {
        let mut inner = self.write();
        let id = inner.ids.next_id();
        let stored = deal.into_deal(id, Utc::now());
        inner.deals.push(stored.clone());

        tracing::debug!(deal_id = %stored.id, total = inner.deals.len(), "Deal appended");
        stored
    }

    fn list(&self) -> Vec<Deal> {
        self.read().deals.clone()
    }

    fn find_by_id(&self, id: &str) -> Option<Deal> {
        self.read().deals.iter().find(|d| d.id == id).cloned()
    }

    fn remove_by_id(&self, id: &str) -> Option<Deal> {
        let mut inner = self.write();
        let index = inner.deals.iter().position(|d| d.id == id)?;
        let removed = inner.deals.remove(index);

        tracing::debug!(deal_id = %removed.id, total = inner.deals.len(), "Deal removed");
        Some(removed)
    }

    fn len(&self) -> usize {
        self.read().deals.len()
    }
}
