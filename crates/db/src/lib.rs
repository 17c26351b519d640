//! Deal storage.
//!
//! Deals live in process memory for the lifetime of the server. Handlers see
//! the store only through the [`DealStore`] trait, so the composition root
//! decides which implementation (and which id scheme) backs the app, and
//! tests build a fresh isolated store each.

pub mod id;
pub mod repositories;
pub mod seed;

pub use id::{IdStrategy, UnknownIdStrategy};
pub use repositories::{DealStore, InMemoryDealStore};
