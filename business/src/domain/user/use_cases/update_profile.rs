use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

/// Store fields to overwrite; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct SellerProfileUpdate {
    pub store_name: Option<String>,
    pub store_location: Option<String>,
    pub store_phone: Option<String>,
    pub store_description: Option<String>,
}

/// Fields to overwrite on the signed-in user; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bio: Option<String>,
    pub seller: Option<SellerProfileUpdate>,
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, UserError>;
}
