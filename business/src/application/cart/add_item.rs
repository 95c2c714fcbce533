use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart",
            params.item.product_id, params.item.quantity
        ));

        let item = CartItem::new(params.item)?;
        let name = item.name.en.clone();

        let mut cart = self.repository.load().await?;
        cart.add_item(item);
        cart.check_totals()?;
        self.repository.save(&cart).await?;

        self.notifier.notify("cart.item_added", &name);
        self.logger.debug(&format!(
            "Cart now holds {} units across {} lines",
            cart.item_count(),
            cart.items().len()
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::NewCartItemProps;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::locale::LocalizedName;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use rust_decimal::Decimal;

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

    fn new_item(product_id: u64, quantity: u32) -> NewCartItemProps {
        NewCartItemProps {
            product_id: ProductId::new(product_id),
            name: LocalizedName::new("Halloumi", Some("حلوم".to_string())),
            unit_price: Decimal::from(22),
            original_unit_price: Decimal::from(35),
            quantity,
            image_ref: None,
            seller_label: "Dairy Corner".to_string(),
            expiry_date: None,
        }
    }

    #[tokio::test]
    async fn should_append_item_and_notify() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(Cart::new()));
        repo.expect_save()
            .withf(|cart| cart.item_count() == 2)
            .times(1)
            .returning(|_| Ok(()));

        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|title, description| title == "cart.item_added" && description == "Halloumi")
            .times(1)
            .returning(|_, _| ());

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                item: new_item(7, 2),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.subtotal().unwrap(), Decimal::from(44));
    }

    #[tokio::test]
    async fn should_bump_quantity_of_existing_line() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| {
            let mut cart = Cart::new();
            cart.add_item(CartItem::new(new_item(7, 1)).unwrap());
            Ok(cart)
        });
        repo.expect_save().returning(|_| Ok(()));

        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_, _| ());

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let cart = use_case
            .execute(AddCartItemParams {
                item: new_item(7, 3),
            })
            .await
            .unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.item_count(), 4);
    }

    #[tokio::test]
    async fn should_reject_zero_quantity_without_touching_storage() {
        let repo = MockCartRepo::new();
        let notifier = MockNotify::new();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                item: new_item(7, 0),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidQuantity));
    }

    #[tokio::test]
    async fn should_propagate_storage_failure() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| Ok(Cart::new()));
        repo.expect_save()
            .returning(|_| Err(RepositoryError::StorageError));

        let notifier = MockNotify::new();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                item: new_item(7, 1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }

    #[tokio::test]
    async fn should_not_save_cart_whose_totals_overflow() {
        let mut repo = MockCartRepo::new();
        repo.expect_load().returning(|| {
            let mut stored = CartItem::new(new_item(3, 10)).unwrap();
            stored.unit_price = Decimal::from_i128_with_scale(10i128.pow(28), 0);
            Ok(Cart::from_items(vec![stored]))
        });
        repo.expect_save().never();

        let mut notifier = MockNotify::new();
        notifier.expect_notify().never();

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                item: new_item(7, 1),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::AmountTooLarge));
    }
}
