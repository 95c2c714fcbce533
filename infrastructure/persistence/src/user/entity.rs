use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{AccountRole, AccountType, SellerProfile, User};
use business::domain::user::password::PasswordCredential;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_salt: String,
    pub password_digest: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub bio: String,
    pub join_date: DateTime<Utc>,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_description: Option<String>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        let role = match self.account_type {
            AccountType::Buyer => AccountRole::Buyer,
            AccountType::Seller => AccountRole::Seller(SellerProfile {
                store_name: self.store_name.unwrap_or_default(),
                store_location: self.store_location.unwrap_or_default(),
                store_phone: self.store_phone.unwrap_or_default(),
                store_description: self.store_description,
            }),
        };

        User::from_repository(
            UserId::new(self.id),
            self.name,
            self.email,
            PasswordCredential::from_repository(self.password_salt, self.password_digest),
            self.phone,
            self.address,
            self.bio,
            self.join_date,
            role,
        )
    }

    pub fn from_domain(user: &User) -> Self {
        let store = user.role.seller_profile();
        Self {
            id: user.id.as_str().to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            password_salt: user.credential.salt.clone(),
            password_digest: user.credential.digest.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            bio: user.bio.clone(),
            join_date: user.join_date,
            account_type: user.role.account_type(),
            store_name: store.map(|s| s.store_name.clone()),
            store_location: store.map(|s| s.store_location.clone()),
            store_phone: store.map(|s| s.store_phone.clone()),
            store_description: store.and_then(|s| s.store_description.clone()),
        }
    }
}
