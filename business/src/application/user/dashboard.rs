use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::logger::Logger;
use crate::domain::order::model::OrderStatus;
use crate::domain::order::repository::OrderRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::dashboard::{GetProfileDashboardUseCase, ProfileDashboard};

pub struct GetProfileDashboardUseCaseImpl {
    pub user_repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub favorite_repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileDashboardUseCase for GetProfileDashboardUseCaseImpl {
    async fn execute(&self) -> Result<ProfileDashboard, UserError> {
        let user_id = self
            .session
            .current_user_id()
            .await?
            .ok_or(UserError::NotAuthenticated)?;
        let user = self
            .user_repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::NotAuthenticated)?;
        self.logger
            .info(&format!("Building profile dashboard: {}", user.id));

        // Orders placed before signing in belong to the same browsing session.
        let mut orders: Vec<_> = self
            .order_repository
            .get_all()
            .await?
            .into_iter()
            .filter(|o| o.customer_id.as_ref().is_none_or(|id| *id == user.id))
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total_spent = orders
            .iter()
            .filter(|o| o.status != OrderStatus::Cancelled)
            .try_fold(Decimal::ZERO, |acc, o| acc.checked_add(o.total))
            .ok_or(UserError::AmountTooLarge)?;
        let favorites_count = self.favorite_repository.get_all().await?.len();

        Ok(ProfileDashboard {
            user: user.profile(),
            order_count: orders.len(),
            orders,
            total_spent,
            favorites_count,
        })
    }
}
