use chrono::{DateTime, Utc};

use super::model::OrderId;

/// Service port for minting order references.
///
/// Ids are not guaranteed to be unique; callers decide what to do about a
/// collision with the archive.
pub trait OrderIdGenerator: Send + Sync {
    fn generate(&self, placed_at: DateTime<Utc>) -> OrderId;
}
