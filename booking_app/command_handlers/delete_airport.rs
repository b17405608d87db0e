use std::sync::Arc;

use booking_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::DeleteAirport},
    uow::UnitOfWork,
};

pub struct DeleteAirportCommandHandler {}

impl Default for DeleteAirportCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DeleteAirportCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<DeleteAirport> for DeleteAirportCommandHandler {
    async fn handle(
        &self,
        command: DeleteAirport,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        let airport_repo = uow.airports();

        let mut airport = airport_repo.get_by_id(command.id).await?;
        airport.soft_delete()?;
        airport_repo.mark_deleted(airport.id).await?;

        tracing::info!(airport_id = %airport.id, code = %airport.code, "Airport deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use uuid::Uuid;

    use booking_domain::test_utils::{AirportFactoryOptions, airport_factory};
    use booking_types::errors::{ApplicationError, DbError};

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, test_config};

    #[tokio::test]
    async fn test_delete_airport_hides_it_from_reads() {
        let config = Arc::new(test_config());
        let mock_uow = MockUnitOfWork::new();
        let airport = airport_factory(AirportFactoryOptions {
            code: Some("LHR"),
            ..Default::default()
        });
        mock_uow.seed_airport(airport.clone());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);

        DeleteAirportCommandHandler::new()
            .handle(DeleteAirport { id: airport.id }, &mock_uow, &config)
            .await
            .unwrap();

        let airports = mock_uow.airports();
        assert!(matches!(
            airports.get_by_id(airport.id).await,
            Err(ApplicationError::Db(DbError::AirportNotFound(_)))
        ));
        assert!(airports.find_by_code("LHR").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_airport() {
        let config = Arc::new(test_config());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let id = Uuid::new_v4();

        let result = DeleteAirportCommandHandler::new()
            .handle(DeleteAirport { id }, &mock_uow, &config)
            .await;

        match result.unwrap_err() {
            ApplicationError::Db(DbError::AirportNotFound(missing)) => assert_eq!(missing, id),
            e => panic!("Expected AirportNotFound error, got: {:?}", e),
        }
    }
}
