mod deal_repo;

pub use deal_repo::{DealStore, InMemoryDealStore};
