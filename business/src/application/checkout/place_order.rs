use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CheckoutFlow;
use crate::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::order::model::{NewOrderProps, Order};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::services::OrderIdGenerator;
use crate::domain::user::session::SessionRepository;

pub struct PlaceOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub order_repository: Arc<dyn OrderRepository>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub id_generator: Arc<dyn OrderIdGenerator>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
    pub shipping_fee: Decimal,
    pub submission_delay: Duration,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, flow: &mut CheckoutFlow) -> Result<Order, CheckoutError> {
        let (shipping, payment) = flow.ready_for_submission()?;

        let cart = self.cart_repository.load().await?;
        if cart.is_empty() {
            self.logger.warn("Refusing to place an order for an empty cart");
            return Err(CheckoutError::EmptyCart);
        }

        self.logger.info(&format!(
            "Submitting order: {} units, {} payment",
            cart.item_count(),
            payment.method()
        ));
        tokio::time::sleep(self.submission_delay).await;

        let placed_at = Utc::now();
        let id = self.id_generator.generate(placed_at);
        if self.order_repository.find_by_id(&id).await?.is_some() {
            self.logger
                .warn(&format!("Order id {} already exists in the archive", id));
        }

        let customer_id = self.session_repository.current_user_id().await?;
        let order = Order::new(NewOrderProps {
            id,
            customer_id,
            items: cart.into_items(),
            shipping,
            payment: payment.summary(),
            flat_shipping_fee: self.shipping_fee,
            created_at: placed_at,
        })
        .map_err(|err| {
            self.logger.error(&format!("Cart totals rejected: {}", err));
            CheckoutError::AmountTooLarge
        })?;

        // Once archived, the order can never be placed a second time.
        self.order_repository.append(&order).await?;
        flow.confirm(order.id.clone())?;
        self.cart_repository.clear().await?;

        self.notifier
            .notify("checkout.order_placed", order.id.as_str());
        self.logger.info(&format!(
            "Order {} placed, total {}",
            order.id, order.total
        ));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::Cart;
    use crate::domain::cart::model::tests::item;
    use crate::domain::checkout::model::{CardDetails, CheckoutStep, PaymentInfo};
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{OrderId, PaymentMethod, ShippingInfo};
    use crate::domain::shared::value_objects::UserId;
    use chrono::{DateTime, Utc};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Cart, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

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
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn current_user_id(&self) -> Result<Option<UserId>, RepositoryError>;
            async fn set_current(&self, user_id: &UserId) -> Result<(), RepositoryError>;
            async fn clear(&self) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub IdGenerator {}

        impl OrderIdGenerator for IdGenerator {
            fn generate(&self, placed_at: DateTime<Utc>) -> OrderId;
        }
    }

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn notify(&self, title: &str, description: &str);
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

    fn fixed_ids() -> Arc<dyn OrderIdGenerator> {
        let mut generator = MockIdGenerator::new();
        generator
            .expect_generate()
            .returning(|_| OrderId::new("ED-4821-2026"));
        Arc::new(generator)
    }

    fn quiet_notifier() -> Arc<dyn Notifier> {
        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_, _| ());
        Arc::new(notifier)
    }

    fn anonymous_session() -> Arc<dyn SessionRepository> {
        let mut session = MockSessionRepo::new();
        session.expect_current_user_id().returning(|| Ok(None));
        Arc::new(session)
    }

    fn flow_in_review(payment: PaymentInfo) -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        flow.submit_shipping(ShippingInfo {
            full_name: "Sara Ali".to_string(),
            phone: "0500000000".to_string(),
            address: "7 Corniche Road".to_string(),
            city: "Jeddah".to_string(),
            postal_code: None,
            notes: None,
        })
        .unwrap();
        flow.submit_payment(payment).unwrap();
        flow
    }

    fn use_case(
        cart_repository: MockCartRepo,
        order_repository: MockOrderRepo,
        session_repository: Arc<dyn SessionRepository>,
    ) -> PlaceOrderUseCaseImpl {
        PlaceOrderUseCaseImpl {
            cart_repository: Arc::new(cart_repository),
            order_repository: Arc::new(order_repository),
            session_repository,
            id_generator: fixed_ids(),
            notifier: quiet_notifier(),
            logger: mock_logger(),
            shipping_fee: Decimal::from(15),
            submission_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn should_archive_order_clear_cart_and_confirm() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(7, 22, 2)])));
        cart_repo.expect_clear().times(1).returning(|| Ok(()));

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo
            .expect_append()
            .withf(|order| order.total == Decimal::from(59))
            .times(1)
            .returning(|_| Ok(()));

        let mut flow = flow_in_review(PaymentInfo::Cash);

        let order = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await
            .unwrap();

        assert_eq!(order.id.as_str(), "ED-4821-2026");
        assert_eq!(order.subtotal, Decimal::from(44));
        assert_eq!(order.shipping_cost, Decimal::from(15));
        assert_eq!(order.total, Decimal::from(59));
        assert_eq!(flow.step(), CheckoutStep::Confirmation);
        assert_eq!(flow.order_id(), Some(&order.id));
    }

    #[tokio::test]
    async fn should_mask_card_number_on_order() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(1, 10, 1)])));
        cart_repo.expect_clear().returning(|| Ok(()));

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo.expect_append().returning(|_| Ok(()));

        let mut flow = flow_in_review(PaymentInfo::Card(CardDetails {
            card_number: "5555 4444 3333 1111".to_string(),
            card_name: "SARA ALI".to_string(),
            expiry: "01/30".to_string(),
            cvv: "999".to_string(),
        }));

        let order = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await
            .unwrap();

        assert_eq!(order.payment.method, PaymentMethod::Card);
        assert_eq!(order.payment.card_last4.as_deref(), Some("1111"));
    }

    #[tokio::test]
    async fn should_attach_logged_in_customer() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(1, 10, 1)])));
        cart_repo.expect_clear().returning(|| Ok(()));

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo.expect_append().returning(|_| Ok(()));

        let mut session = MockSessionRepo::new();
        session
            .expect_current_user_id()
            .returning(|| Ok(Some(UserId::new("buyer-1"))));

        let mut flow = flow_in_review(PaymentInfo::Cash);

        let order = use_case(cart_repo, order_repo, Arc::new(session))
            .execute(&mut flow)
            .await
            .unwrap();

        assert_eq!(order.customer_id, Some(UserId::new("buyer-1")));
    }

    #[tokio::test]
    async fn should_refuse_empty_cart() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_load().returning(|| Ok(Cart::new()));
        cart_repo.expect_clear().never();

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_append().never();

        let mut flow = flow_in_review(PaymentInfo::Cash);

        let result = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::EmptyCart));
        assert_eq!(flow.step(), CheckoutStep::Review);
    }

    #[tokio::test]
    async fn should_refuse_when_not_in_review() {
        let cart_repo = MockCartRepo::new();
        let order_repo = MockOrderRepo::new();
        let mut flow = CheckoutFlow::new();

        let result = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await;

        assert!(matches!(
            result.unwrap_err(),
            CheckoutError::InvalidTransition { .. }
        ));
        assert_eq!(flow.step(), CheckoutStep::Shipping);
    }

    #[tokio::test]
    async fn should_keep_cart_when_archive_write_fails() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(1, 10, 1)])));
        cart_repo.expect_clear().never();

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo
            .expect_append()
            .returning(|_| Err(RepositoryError::StorageError));

        let mut flow = flow_in_review(PaymentInfo::Cash);

        let result = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::Repository(_)));
        assert_eq!(flow.step(), CheckoutStep::Review);
    }

    #[tokio::test]
    async fn should_leave_state_untouched_when_dropped_during_submission() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(1, 10, 1)])));
        cart_repo.expect_clear().never();

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_append().never();

        let mut use_case = use_case(cart_repo, order_repo, anonymous_session());
        use_case.submission_delay = Duration::from_secs(60);
        let mut flow = flow_in_review(PaymentInfo::Cash);

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            use_case.execute(&mut flow),
        )
        .await;

        assert!(outcome.is_err());
        assert_eq!(flow.step(), CheckoutStep::Review);
    }

    #[tokio::test]
    async fn should_not_place_twice_when_clearing_the_cart_fails() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_load()
            .returning(|| Ok(Cart::from_items(vec![item(1, 10, 1)])));
        cart_repo
            .expect_clear()
            .times(1)
            .returning(|| Err(RepositoryError::StorageError));

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo.expect_append().times(1).returning(|_| Ok(()));

        let use_case = use_case(cart_repo, order_repo, anonymous_session());
        let mut flow = flow_in_review(PaymentInfo::Cash);

        let first = use_case.execute(&mut flow).await;
        let retry = use_case.execute(&mut flow).await;

        assert!(matches!(first.unwrap_err(), CheckoutError::Repository(_)));
        assert_eq!(flow.step(), CheckoutStep::Confirmation);
        assert!(matches!(
            retry.unwrap_err(),
            CheckoutError::InvalidTransition { .. }
        ));
    }

    #[tokio::test]
    async fn should_reject_cart_whose_totals_overflow() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_load().returning(|| {
            let mut line = item(1, 0, 10);
            line.unit_price = Decimal::from_i128_with_scale(10i128.pow(28), 0);
            Ok(Cart::from_items(vec![line]))
        });
        cart_repo.expect_clear().never();

        let mut order_repo = MockOrderRepo::new();
        order_repo.expect_find_by_id().returning(|_| Ok(None));
        order_repo.expect_append().never();

        let mut flow = flow_in_review(PaymentInfo::Cash);

        let result = use_case(cart_repo, order_repo, anonymous_session())
            .execute(&mut flow)
            .await;

        assert!(matches!(result.unwrap_err(), CheckoutError::AmountTooLarge));
        assert_eq!(flow.step(), CheckoutStep::Review);
    }
}
