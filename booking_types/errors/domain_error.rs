use thiserror::Error;
use uuid::Uuid;

/// Errors for domain rules.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Airport with code '{code}' already exists")]
    AirportAlreadyExists { code: String },

    #[error("Passenger with passport number '{passport_number}' already exists")]
    PassengerAlreadyExists { passport_number: String },

    #[error("User with email '{email}' already exists")]
    UserAlreadyExists { email: String },

    #[error("Entity with ID {0} is already deleted")]
    AlreadyDeleted(Uuid),
}
