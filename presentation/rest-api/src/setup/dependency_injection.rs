use std::sync::Arc;

use logger::{TracingLogger, TracingNotifier};
use persistence::cart::repository::CartRepositoryKv;
use persistence::favorite::repository::FavoriteRepositoryKv;
use persistence::order::repository::OrderRepositoryKv;
use persistence::session::repository::SessionRepositoryKv;
use persistence::user::repository::UserRepositoryKv;

use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::clear::ClearCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateCartQuantityUseCaseImpl;
use business::application::checkout::order_id::RandomOrderIdGenerator;
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::favorite::add::AddFavoriteUseCaseImpl;
use business::application::favorite::get_all::GetFavoritesUseCaseImpl;
use business::application::favorite::remove::RemoveFavoriteUseCaseImpl;
use business::application::favorite::toggle::ToggleFavoriteUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::user::check_email::CheckExistingEmailUseCaseImpl;
use business::application::user::current::GetCurrentUserUseCaseImpl;
use business::application::user::dashboard::GetProfileDashboardUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::logout::LogoutUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;
use business::application::user::update_profile::UpdateProfileUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub profile_api: crate::api::profile::routes::ProfileApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub favorite_api: crate::api::favorite::routes::FavoriteApi,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let notifier = Arc::new(TracingNotifier);
        let health_api = crate::api::health::routes::Api::new(config.storage.backend_name());

        // Infrastructure adapters
        let store = config.storage.init_store().await?;
        let keys = config.storage.keys();
        let user_repository = Arc::new(UserRepositoryKv::new(store.clone(), &keys, logger.clone()));
        let session_repository =
            Arc::new(SessionRepositoryKv::new(store.clone(), &keys, logger.clone()));
        let cart_repository = Arc::new(CartRepositoryKv::new(store.clone(), &keys, logger.clone()));
        let order_repository =
            Arc::new(OrderRepositoryKv::new(store.clone(), &keys, logger.clone()));
        let favorite_repository = Arc::new(FavoriteRepositoryKv::new(store, &keys, logger.clone()));

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            session: session_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository.clone(),
            session: session_repository.clone(),
            logger: logger.clone(),
        });
        let logout_use_case = Arc::new(LogoutUseCaseImpl {
            session: session_repository.clone(),
            logger: logger.clone(),
        });
        let current_user_use_case = Arc::new(GetCurrentUserUseCaseImpl {
            repository: user_repository.clone(),
            session: session_repository.clone(),
            logger: logger.clone(),
        });
        let check_email_use_case = Arc::new(CheckExistingEmailUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let update_profile_use_case = Arc::new(UpdateProfileUseCaseImpl {
            repository: user_repository.clone(),
            session: session_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let dashboard_use_case = Arc::new(GetProfileDashboardUseCaseImpl {
            user_repository,
            session: session_repository.clone(),
            order_repository: order_repository.clone(),
            favorite_repository: favorite_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
            shipping_fee: config.checkout.shipping_fee,
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            notifier: notifier.clone(),
            logger: logger.clone(),
        });
        let update_cart_quantity_use_case = Arc::new(UpdateCartQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let clear_cart_use_case = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });

        // Checkout and order use cases
        let place_order_use_case = Arc::new(PlaceOrderUseCaseImpl {
            cart_repository,
            order_repository: order_repository.clone(),
            session_repository,
            id_generator: Arc::new(RandomOrderIdGenerator),
            notifier: notifier.clone(),
            logger: logger.clone(),
            shipping_fee: config.checkout.shipping_fee,
            submission_delay: config.checkout.submission_delay,
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository,
            logger: logger.clone(),
        });

        // Favorite use cases
        let get_favorites_use_case = Arc::new(GetFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let add_favorite_use_case = Arc::new(AddFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_favorite_use_case = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            notifier,
            logger: logger.clone(),
        });
        let remove_favorite_use_case = Arc::new(RemoveFavoriteUseCaseImpl {
            repository: favorite_repository,
            logger,
        });

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            logout_use_case,
            current_user_use_case.clone(),
            check_email_use_case,
        );

        let profile_api = crate::api::profile::routes::ProfileApi::new(
            current_user_use_case,
            update_profile_use_case,
            dashboard_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            update_cart_quantity_use_case,
            remove_cart_item_use_case,
            clear_cart_use_case,
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(place_order_use_case);

        let order_api = crate::api::order::routes::OrderApi::new(
            get_all_orders_use_case,
            get_order_by_id_use_case,
        );

        let favorite_api = crate::api::favorite::routes::FavoriteApi::new(
            get_favorites_use_case,
            add_favorite_use_case,
            toggle_favorite_use_case,
            remove_favorite_use_case,
        );

        Ok(Self {
            health_api,
            auth_api,
            profile_api,
            cart_api,
            checkout_api,
            order_api,
            favorite_api,
        })
    }
}
