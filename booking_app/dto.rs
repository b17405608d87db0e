//! Response shapes returned by the pipeline.
//!
//! Conversions from the domain are total: handlers only map entities that
//! were actually found or created.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_domain::models::{airport::Airport, passenger::Passenger};
use booking_types::{common::User, passenger::PassengerType};

/// Result of a create command: the identifier carried by the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedId {
    pub id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportDto {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub code: String,
}

impl From<&Airport> for AirportDto {
    fn from(airport: &Airport) -> Self {
        Self {
            id: airport.id,
            name: airport.name.clone(),
            address: airport.address.clone(),
            code: airport.code.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerDto {
    pub id: Uuid,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: i32,
}

impl From<&Passenger> for PassengerDto {
    fn from(passenger: &Passenger) -> Self {
        Self {
            id: passenger.id,
            name: passenger.name.clone(),
            passport_number: passenger.passport_number.clone(),
            passenger_type: passenger.passenger_type,
            age: passenger.age,
        }
    }
}

/// Public view of a user; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub email: String,
}

impl From<&User> for UserDto {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use booking_domain::test_utils::{
        AirportFactoryOptions, PassengerFactoryOptions, airport_factory, passenger_factory,
    };

    use super::*;

    #[test]
    fn test_airport_dto_copies_visible_fields() {
        let airport = airport_factory(AirportFactoryOptions {
            name: Some("JFK Intl"),
            address: Some("NYC"),
            code: Some("JFK"),
            ..Default::default()
        });

        let dto = AirportDto::from(&airport);
        assert_eq!(dto.id, airport.id);
        assert_eq!(dto.name, "JFK Intl");
        assert_eq!(dto.address, "NYC");
        assert_eq!(dto.code, "JFK");
    }

    #[test]
    fn test_passenger_dto_copies_visible_fields() {
        let passenger = passenger_factory(PassengerFactoryOptions {
            passenger_type: Some(PassengerType::Baby),
            age: Some(1),
            ..Default::default()
        });

        let dto = PassengerDto::from(&passenger);
        assert_eq!(dto.id, passenger.id);
        assert_eq!(dto.passport_number, passenger.passport_number);
        assert_eq!(dto.passenger_type, PassengerType::Baby);
        assert_eq!(dto.age, 1);
    }
}
