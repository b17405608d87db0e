use uuid::Uuid;

use booking_types::{common::User, errors::ApplicationError};

#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Saves a new user.
    async fn add(&self, user: &User) -> Result<(), ApplicationError>;

    /// Find user by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError>;

    /// Get user by id.
    async fn get_by_id(&self, user_id: Uuid) -> Result<User, ApplicationError>;
}
