use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        self.logger.info(&format!("Getting order: {}", params.id));

        self.repository
            .find_by_id(&params.id)
            .await?
            .ok_or(OrderError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{NewOrderProps, OrderId, PaymentSummary, ShippingInfo};
    use chrono::Utc;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, RepositoryError>;
            async fn append(&self, order: &Order) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_order_when_found() {
        let mut repo = MockOrderRepo::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Order::new(NewOrderProps {
                id: id.clone(),
                customer_id: None,
                items: Vec::new(),
                shipping: ShippingInfo::default(),
                payment: PaymentSummary::cash(),
                flat_shipping_fee: Decimal::from(15),
                created_at: Utc::now(),
            })
            .unwrap()))
        });

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(GetOrderByIdParams {
                id: OrderId::new("ED-9-2026"),
            })
            .await
            .unwrap();

        assert_eq!(order.id.as_str(), "ED-9-2026");
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut repo = MockOrderRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id: OrderId::new("ED-0-2026"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
