use uuid::Uuid;

use booking_domain::models::passenger::Passenger;
use booking_types::errors::ApplicationError;

/// Document storage for passengers.
///
/// Every read ignores soft-deleted documents.
#[async_trait::async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn add(&self, passenger: &Passenger) -> Result<(), ApplicationError>;

    async fn find_by_passport_number(
        &self,
        passport_number: &str,
    ) -> Result<Option<Passenger>, ApplicationError>;

    async fn get_by_id(&self, passenger_id: Uuid) -> Result<Passenger, ApplicationError>;

    async fn mark_deleted(&self, passenger_id: Uuid) -> Result<(), ApplicationError>;
}
