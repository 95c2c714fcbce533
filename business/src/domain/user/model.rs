use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::UserError;
use super::password::{MIN_PASSWORD_LENGTH, PasswordCredential};
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Buyer,
    Seller,
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Buyer => write!(f, "buyer"),
            AccountType::Seller => write!(f, "seller"),
        }
    }
}

/// Store details only seller accounts carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SellerProfile {
    pub store_name: String,
    pub store_location: String,
    pub store_phone: String,
    pub store_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountRole {
    Buyer,
    Seller(SellerProfile),
}

impl AccountRole {
    pub fn account_type(&self) -> AccountType {
        match self {
            AccountRole::Buyer => AccountType::Buyer,
            AccountRole::Seller(_) => AccountType::Seller,
        }
    }

    pub fn seller_profile(&self) -> Option<&SellerProfile> {
        match self {
            AccountRole::Buyer => None,
            AccountRole::Seller(profile) => Some(profile),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub credential: PasswordCredential,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub join_date: DateTime<Utc>,
    pub role: AccountRole,
}

pub struct NewUserProps {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub role: AccountRole,
}

/// The signed-in user as the rest of the storefront sees it: everything but
/// the credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub bio: String,
    pub join_date: DateTime<Utc>,
    pub role: AccountRole,
}

/// Trimmed, lowercase form used for uniqueness checks and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub(crate) fn validate_email(email: &str) -> Result<String, UserError> {
    let email = normalize_email(email);
    if email.is_empty() {
        return Err(UserError::EmailEmpty);
    }
    if !is_valid_email(&email) {
        return Err(UserError::InvalidEmail);
    }
    Ok(email)
}

impl User {
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        if props.name.trim().is_empty() {
            return Err(UserError::NameEmpty);
        }

        let email = validate_email(&props.email)?;

        if props.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(UserError::PasswordTooShort);
        }

        if props.password != props.confirm_password {
            return Err(UserError::PasswordMismatch);
        }

        if let AccountRole::Seller(profile) = &props.role
            && profile.store_name.trim().is_empty()
        {
            return Err(UserError::StoreNameEmpty);
        }

        Ok(Self {
            id: UserId::generate(),
            name: props.name.trim().to_string(),
            email,
            credential: PasswordCredential::hash(&props.password),
            phone: props.phone,
            address: props.address,
            bio: props.bio,
            join_date: Utc::now(),
            role: props.role,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: UserId,
        name: String,
        email: String,
        credential: PasswordCredential,
        phone: String,
        address: String,
        bio: String,
        join_date: DateTime<Utc>,
        role: AccountRole,
    ) -> Self {
        Self {
            id,
            name,
            email,
            credential,
            phone,
            address,
            bio,
            join_date,
            role,
        }
    }

    pub fn verify_password(&self, password: &str) -> bool {
        self.credential.verify(password)
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            bio: self.bio.clone(),
            join_date: self.join_date,
            role: self.role.clone(),
        }
    }
}
