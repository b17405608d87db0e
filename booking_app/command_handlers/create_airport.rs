use std::sync::Arc;

use booking_domain::models::airport::Airport;
use booking_types::errors::{ApplicationError, DomainError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::CreateAirport},
    dto::CreatedId,
    uow::UnitOfWork,
};

pub struct CreateAirportCommandHandler {}

impl Default for CreateAirportCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateAirportCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<CreateAirport> for CreateAirportCommandHandler {
    async fn handle(
        &self,
        command: CreateAirport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<CreatedId, ApplicationError> {
        let airport_repo = uow.airports();

        // Fast path only: the live-code unique index settles races.
        if airport_repo.find_by_code(&command.code).await?.is_some() {
            return Err(DomainError::AirportAlreadyExists { code: command.code }.into());
        }

        let airport = Airport::new(command.id, command.name, command.address, command.code);
        airport_repo.add(&airport).await?;

        tracing::info!(airport_id = %airport.id, code = %airport.code, "Airport created");
        Ok(CreatedId { id: airport.id })
    }
}
