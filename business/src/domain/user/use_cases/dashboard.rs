use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::order::model::Order;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

#[derive(Debug, Clone)]
pub struct ProfileDashboard {
    pub user: UserProfile,
    /// Newest first.
    pub orders: Vec<Order>,
    pub order_count: usize,
    /// Sum of order totals, cancelled orders excluded.
    pub total_spent: Decimal,
    pub favorites_count: usize,
}

#[async_trait]
pub trait GetProfileDashboardUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProfileDashboard, UserError>;
}
