use uuid::Uuid;

use booking_domain::models::airport::Airport;
use booking_types::errors::ApplicationError;

/// Relational storage for airports.
///
/// Every read ignores soft-deleted rows.
#[async_trait::async_trait]
pub trait AirportRepository: Send + Sync {
    /// Inserts a new airport. Reports a unique violation if a live airport
    /// already owns the same code.
    async fn add(&self, airport: &Airport) -> Result<(), ApplicationError>;

    /// Returns the live airport owning `code`, if any.
    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, ApplicationError>;

    /// Returns a live airport by id.
    async fn get_by_id(&self, airport_id: Uuid) -> Result<Airport, ApplicationError>;

    /// Flags an airport as deleted.
    async fn mark_deleted(&self, airport_id: Uuid) -> Result<(), ApplicationError>;
}
