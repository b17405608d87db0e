use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use booking_types::errors::ApplicationError;

use crate::repository::*;

/// A Unit of Work (UoW) works as a provider for repositories
/// that all operate within a single transaction.
#[async_trait::async_trait]
pub trait UnitOfWork<'a>: Send + Sync {
    // Methods to access transactional repositories
    fn airports(&self) -> Arc<dyn AirportRepository + 'a>;
    fn passengers(&self) -> Arc<dyn PassengerRepository + 'a>;
    fn users(&self) -> Arc<dyn UserRepository + 'a>;

    // Transaction control methods
    // Consume self to ensure the UoW is not used after commit/rollback
    async fn commit(self: Box<Self>) -> Result<(), ApplicationError>;
    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError>;
}

/// A factory for creating Unit of Work instances.
#[async_trait::async_trait]
pub trait UnitOfWorkProvider: Send + Sync {
    /// Begin a new Unit of Work (transaction).
    ///
    /// Repositories handed out by the UoW check `cancel` at every store call
    /// and give up with `ApplicationError::Cancelled` once it fires.
    async fn begin<'p>(
        &'p self,
        cancel: CancellationToken,
    ) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError>;
}
