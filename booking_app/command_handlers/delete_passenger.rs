use std::sync::Arc;

use booking_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeletePassenger},
    uow::UnitOfWork,
};

pub struct DeletePassengerCommandHandler {}

impl Default for DeletePassengerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeletePassengerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeletePassenger> for DeletePassengerCommandHandler {
    async fn handle(
        &self,
        command: DeletePassenger,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let passenger_repo = uow.passengers();

        let mut passenger = passenger_repo.get_by_id(command.id).await?;
        passenger.soft_delete()?;
        passenger_repo.mark_deleted(passenger.id).await?;

        tracing::info!(passenger_id = %passenger.id, "Passenger deleted");
        Ok(())
    }
}
