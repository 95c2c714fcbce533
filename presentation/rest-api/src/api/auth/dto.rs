use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::user::model::{AccountRole, SellerProfile, UserProfile};

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Display name (cannot be empty)
    pub name: String,
    /// Email address, unique per account
    pub email: String,
    /// At least 6 characters
    pub password: String,
    /// Must equal `password`
    pub confirm_password: String,
    #[oai(default)]
    pub phone: String,
    #[oai(default)]
    pub address: String,
    #[oai(default)]
    pub bio: String,
    /// "buyer" (default) or "seller"
    #[oai(skip_serializing_if_is_none)]
    pub account_type: Option<String>,
    /// Store details, required for sellers
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<StoreRequest>,
}

#[derive(Debug, Clone, Object)]
pub struct StoreRequest {
    pub store_name: String,
    #[oai(default)]
    pub store_location: String,
    #[oai(default)]
    pub store_phone: String,
    #[oai(skip_serializing_if_is_none)]
    pub store_description: Option<String>,
}

impl From<StoreRequest> for SellerProfile {
    fn from(store: StoreRequest) -> Self {
        Self {
            store_name: store.store_name,
            store_location: store.store_location,
            store_phone: store.store_phone,
            store_description: store.store_description,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct StoreResponse {
    pub store_name: String,
    pub store_location: String,
    pub store_phone: String,
    #[oai(skip_serializing_if_is_none)]
    pub store_description: Option<String>,
}

impl From<&SellerProfile> for StoreResponse {
    fn from(store: &SellerProfile) -> Self {
        Self {
            store_name: store.store_name.clone(),
            store_location: store.store_location.clone(),
            store_phone: store.store_phone.clone(),
            store_description: store.store_description.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub join_date: DateTime<Utc>,
    /// "buyer" or "seller"
    pub account_type: String,
    /// Present for seller accounts only
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<StoreResponse>,
}

impl From<UserProfile> for UserResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id.to_string(),
            account_type: user.role.account_type().to_string(),
            store: user.role.seller_profile().map(StoreResponse::from),
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            bio: user.bio,
            join_date: user.join_date,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CurrentUserResponse {
    /// Absent when nobody is signed in
    #[oai(skip_serializing_if_is_none)]
    pub user: Option<UserResponse>,
}

#[derive(Debug, Clone, Object)]
pub struct EmailExistsResponse {
    pub exists: bool,
}

/// Resolves the account type and store details of a registration.
pub fn role_from_request(
    account_type: Option<&str>,
    store: Option<StoreRequest>,
) -> Result<AccountRole, &'static str> {
    match account_type.map(str::trim).unwrap_or("buyer") {
        "buyer" => Ok(AccountRole::Buyer),
        "seller" => Ok(AccountRole::Seller(
            store.map(SellerProfile::from).unwrap_or_default(),
        )),
        _ => Err("user.invalid_account_type"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_buyer() {
        assert_eq!(role_from_request(None, None).unwrap(), AccountRole::Buyer);
    }

    #[test]
    fn should_build_seller_role_from_store() {
        let role = role_from_request(
            Some("seller"),
            Some(StoreRequest {
                store_name: "Bab Al Yemen Bakery".to_string(),
                store_location: "Riyadh".to_string(),
                store_phone: String::new(),
                store_description: None,
            }),
        )
        .unwrap();

        assert_eq!(
            role.seller_profile().map(|s| s.store_name.as_str()),
            Some("Bab Al Yemen Bakery")
        );
    }

    #[test]
    fn should_reject_unknown_account_type() {
        assert_eq!(
            role_from_request(Some("admin"), None).unwrap_err(),
            "user.invalid_account_type"
        );
    }
}
