use async_trait::async_trait;
use std::sync::Arc;

use booking_types::errors::{AppError, ApplicationError};

use crate::{
    auth::verify_credentials,
    config::Config,
    cqrs::{Query, QueryHandler, queries::AuthenticateUser},
    uow::UnitOfWork,
};

pub struct AuthenticateUserHandler {}

impl AuthenticateUserHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<AuthenticateUser> for AuthenticateUserHandler {
    async fn handle(
        &self,
        query: AuthenticateUser,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<<AuthenticateUser as Query>::Output, ApplicationError> {
        let email = query.email.trim().to_lowercase();
        let user = uow.users().find_by_email(&email).await?;

        // unknown email and wrong password look the same to the caller
        let stored_hash = user.as_ref().map(|u| u.password_hash().to_string());
        verify_credentials(stored_hash, query.password).await?;

        Ok(user.ok_or(AppError::WrongAuthCredentials)?)
    }
}
