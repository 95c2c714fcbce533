use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{AccountRole, UserProfile, validate_email};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::update_profile::{UpdateProfileParams, UpdateProfileUseCase};

pub struct UpdateProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    async fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, UserError> {
        let user_id = self
            .session
            .current_user_id()
            .await?
            .ok_or(UserError::NotAuthenticated)?;
        self.logger.info(&format!("Updating profile: {}", user_id));

        let mut user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::NotAuthenticated)?;

        if let Some(name) = params.name {
            if name.trim().is_empty() {
                return Err(UserError::NameEmpty);
            }
            user.name = name.trim().to_string();
        }

        if let Some(email) = params.email {
            let email = validate_email(&email)?;
            if email != user.email {
                if let Some(other) = self.repository.find_by_email(&email).await?
                    && other.id != user.id
                {
                    return Err(UserError::EmailTaken);
                }
                user.email = email;
            }
        }

        if let Some(phone) = params.phone {
            user.phone = phone;
        }
        if let Some(address) = params.address {
            user.address = address;
        }
        if let Some(bio) = params.bio {
            user.bio = bio;
        }

        if let Some(update) = params.seller {
            let AccountRole::Seller(store) = &mut user.role else {
                return Err(UserError::NotASeller);
            };
            if let Some(store_name) = update.store_name {
                if store_name.trim().is_empty() {
                    return Err(UserError::StoreNameEmpty);
                }
                store.store_name = store_name;
            }
            if let Some(store_location) = update.store_location {
                store.store_location = store_location;
            }
            if let Some(store_phone) = update.store_phone {
                store.store_phone = store_phone;
            }
            if let Some(store_description) = update.store_description {
                store.store_description = Some(store_description);
            }
        }

        self.repository.save(&user).await?;

        self.notifier.notify("profile.updated", &user.name);
        self.logger.info(&format!("Profile updated: {}", user.id));
        Ok(user.profile())
    }
}
