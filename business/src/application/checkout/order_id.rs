use chrono::{DateTime, Utc};
use rand::Rng;

use crate::domain::order::model::OrderId;
use crate::domain::order::services::OrderIdGenerator;

/// `ED-<random 0..=9999>-<year>`.
pub struct RandomOrderIdGenerator;

impl OrderIdGenerator for RandomOrderIdGenerator {
    fn generate(&self, placed_at: DateTime<Utc>) -> OrderId {
        let number: u16 = rand::rng().random_range(0..=9999);
        OrderId::from_parts(number, placed_at)
    }
}
