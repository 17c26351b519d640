/// Deal ids are opaque strings assigned by the store.
pub type DealId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
