use std::sync::Arc;

use booking_types::{
    common::User,
    errors::{ApplicationError, DomainError},
};

use crate::{
    auth::hash_password_off_worker,
    config::Config,
    cqrs::{CommandHandler, commands::RegisterUser},
    dto::CreatedId,
    uow::UnitOfWork,
};

pub struct RegisterUserCommandHandler {}

impl Default for RegisterUserCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterUserCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterUser> for RegisterUserCommandHandler {
    async fn handle(
        &self,
        command: RegisterUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<CreatedId, ApplicationError> {
        let user_repo = uow.users();
        let email = command.email.trim().to_lowercase();

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(DomainError::UserAlreadyExists { email }.into());
        }

        let password_hash = hash_password_off_worker(command.password).await?;
        let user = User::new(command.id, email, password_hash);
        user_repo.add(&user).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(CreatedId { id: user.id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use booking_types::errors::{ApplicationError, DomainError};

    use super::*;
    use crate::{
        auth::verify_password,
        test_utils::tests::{MockUnitOfWork, test_config},
    };

    #[tokio::test]
    async fn test_register_user_hashes_password() {
        let config = Arc::new(test_config());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let command = RegisterUser::new(" Agent@Example.com ".to_string(), "Secure123!".to_string());

        let created = RegisterUserCommandHandler::new()
            .handle(command.clone(), &mock_uow, &config)
            .await
            .unwrap();
        assert_eq!(created.id, command.id);

        let user = mock_uow
            .users()
            .find_by_email("agent@example.com")
            .await
            .unwrap()
            .expect("user should be stored with a normalized email");
        assert_ne!(user.password_hash(), "Secure123!");
        assert!(verify_password(user.password_hash(), "Secure123!").is_ok());
    }

    #[tokio::test]
    async fn test_register_user_duplicate_email() {
        let config = Arc::new(test_config());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let handler = RegisterUserCommandHandler::new();

        handler
            .handle(
                RegisterUser::new("agent@example.com".to_string(), "one".to_string()),
                &mock_uow,
                &config,
            )
            .await
            .unwrap();

        let result = handler
            .handle(
                RegisterUser::new("AGENT@example.com".to_string(), "two".to_string()),
                &mock_uow,
                &config,
            )
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::UserAlreadyExists { .. }))
        ));
    }
}
