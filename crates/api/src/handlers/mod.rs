pub mod deals;
pub mod health;
