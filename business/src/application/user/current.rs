use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::session::SessionRepository;
use crate::domain::user::use_cases::current::GetCurrentUserUseCase;

pub struct GetCurrentUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub session: Arc<dyn SessionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCurrentUserUseCase for GetCurrentUserUseCaseImpl {
    async fn execute(&self) -> Result<Option<UserProfile>, UserError> {
        let Some(user_id) = self.session.current_user_id().await? else {
            return Ok(None);
        };

        match self.repository.find_by_id(&user_id).await? {
            Some(user) => Ok(Some(user.profile())),
            None => {
                self.logger.warn(&format!(
                    "Session points at unknown user {}, treating as signed out",
                    user_id
                ));
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::User;
    use crate::domain::user::model::tests::buyer_props;
    use mockall::mock;

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_all(&self) -> Result<Vec<User>, RepositoryError>;
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
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
    async fn should_return_none_when_signed_out() {
        let repo = MockUserRepo::new();
        let mut session = MockSessionRepo::new();
        session.expect_current_user_id().returning(|| Ok(None));

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_resolve_session_through_user_store() {
        let user = User::new(buyer_props("a@b.com")).unwrap();
        let user_id = user.id.clone();

        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(user.clone())));
        let mut session = MockSessionRepo::new();
        session
            .expect_current_user_id()
            .returning(move || Ok(Some(user_id.clone())));

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let profile = use_case.execute().await.unwrap().unwrap();
        assert_eq!(profile.email, "a@b.com");
    }

    #[tokio::test]
    async fn should_treat_dangling_session_as_signed_out() {
        let mut repo = MockUserRepo::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let mut session = MockSessionRepo::new();
        session
            .expect_current_user_id()
            .returning(|| Ok(Some(UserId::new("deleted"))));

        let use_case = GetCurrentUserUseCaseImpl {
            repository: Arc::new(repo),
            session: Arc::new(session),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_none());
    }
}
