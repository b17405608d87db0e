use std::sync::Arc;

use booking_domain::models::passenger::Passenger;
use booking_types::errors::{ApplicationError, DomainError};

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RegisterPassenger},
    dto::CreatedId,
    uow::UnitOfWork,
};

pub struct RegisterPassengerCommandHandler {}

impl Default for RegisterPassengerCommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPassengerCommandHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait::async_trait]
impl CommandHandler<RegisterPassenger> for RegisterPassengerCommandHandler {
    async fn handle(
        &self,
        command: RegisterPassenger,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<CreatedId, ApplicationError> {
        let passenger_repo = uow.passengers();

        if passenger_repo
            .find_by_passport_number(&command.passport_number)
            .await?
            .is_some()
        {
            return Err(DomainError::PassengerAlreadyExists {
                passport_number: command.passport_number,
            }
            .into());
        }

        let passenger = Passenger::new(
            command.id,
            command.name,
            command.passport_number,
            command.passenger_type,
            command.age,
        );
        passenger_repo.add(&passenger).await?;

        tracing::info!(passenger_id = %passenger.id, "Passenger registered");
        Ok(CreatedId { id: passenger.id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use booking_domain::test_utils::{PassengerFactoryOptions, passenger_factory};
    use booking_types::{
        errors::{ApplicationError, DomainError},
        passenger::PassengerType,
    };

    use super::*;
    use crate::test_utils::tests::{MockUnitOfWork, test_config};

    #[tokio::test]
    async fn test_register_passenger_success() {
        let config = Arc::new(test_config());
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(MockUnitOfWork::new());
        let command = RegisterPassenger::new(
            "Ada Lovelace".to_string(),
            "GB1815".to_string(),
            PassengerType::Female,
            36,
        );

        let created = RegisterPassengerCommandHandler::new()
            .handle(command.clone(), &mock_uow, &config)
            .await
            .unwrap();
        assert_eq!(created.id, command.id);

        let passenger = mock_uow.passengers().get_by_id(command.id).await.unwrap();
        assert_eq!(passenger.name, "Ada Lovelace");
        assert_eq!(passenger.passport_number, "GB1815");
        assert_eq!(passenger.passenger_type, PassengerType::Female);
        assert_eq!(passenger.age, 36);
    }

    #[tokio::test]
    async fn test_register_passenger_duplicate_passport() {
        let config = Arc::new(test_config());
        let mock_uow = MockUnitOfWork::new();
        mock_uow.seed_passenger(passenger_factory(PassengerFactoryOptions {
            passport_number: Some("GB1815"),
            ..Default::default()
        }));
        let mock_uow: Box<dyn UnitOfWork<'_> + '_> = Box::new(mock_uow);

        let command = RegisterPassenger::new(
            "Someone Else".to_string(),
            "GB1815".to_string(),
            PassengerType::Male,
            40,
        );
        let result = RegisterPassengerCommandHandler::new()
            .handle(command.clone(), &mock_uow, &config)
            .await;

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::PassengerAlreadyExists { .. }))
        ));
        assert!(mock_uow.passengers().get_by_id(command.id).await.is_err());
    }
}
