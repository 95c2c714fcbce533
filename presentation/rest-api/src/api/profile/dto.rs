use poem_openapi::Object;

use business::domain::order::errors::OrderError;
use business::domain::user::use_cases::dashboard::ProfileDashboard;
use business::domain::user::use_cases::update_profile::{SellerProfileUpdate, UpdateProfileParams};

use crate::api::auth::dto::UserResponse;
use crate::api::money::to_amount;
use crate::api::order::dto::OrderResponse;

/// Omitted fields keep their current value
#[derive(Debug, Clone, Object)]
pub struct UpdateProfileRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub address: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub bio: Option<String>,
    /// Seller accounts only
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<UpdateStoreRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateStoreRequest {
    #[oai(skip_serializing_if_is_none)]
    pub store_name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub store_location: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub store_phone: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub store_description: Option<String>,
}

impl From<UpdateProfileRequest> for UpdateProfileParams {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            bio: request.bio,
            seller: request.store.map(|store| SellerProfileUpdate {
                store_name: store.store_name,
                store_location: store.store_location,
                store_phone: store.store_phone,
                store_description: store.store_description,
            }),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DashboardResponse {
    pub user: UserResponse,
    /// Newest first
    pub orders: Vec<OrderResponse>,
    pub order_count: u64,
    /// Sum of order totals, cancelled orders excluded
    pub total_spent: f64,
    pub favorites_count: u64,
}

impl TryFrom<ProfileDashboard> for DashboardResponse {
    type Error = OrderError;

    fn try_from(dashboard: ProfileDashboard) -> Result<Self, Self::Error> {
        Ok(Self {
            user: dashboard.user.into(),
            orders: dashboard
                .orders
                .into_iter()
                .map(OrderResponse::try_from)
                .collect::<Result<_, _>>()?,
            order_count: dashboard.order_count as u64,
            total_spent: to_amount(dashboard.total_spent),
            favorites_count: dashboard.favorites_count as u64,
        })
    }
}
