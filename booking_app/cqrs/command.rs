use async_trait::async_trait;
use booking_types::{errors::ApplicationError, validation::ValidationErrors};
use std::sync::Arc;

use crate::{config::Config, uow::UnitOfWork};

/// A trait for Command structs.
/// Commands are operations that change the state of the system.
pub trait Command: Send + Sync {
    /// The data type returned to the caller on success.
    type Output: Send + Sync;

    /// Structural checks run by the AppBus before any store is touched.
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

/// A trait for handlers that execute Commands.
/// It receives an already validated command and a Unit of Work to use.
/// It should NOT manage the transaction lifecycle (commit/rollback);
/// that is the job of the AppBus.
#[async_trait]
pub trait CommandHandler<C: Command> {
    async fn handle(
        &self,
        cmd: C,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<C::Output, ApplicationError>;
}
