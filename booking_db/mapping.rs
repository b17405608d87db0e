use booking_domain::models as domain_models;
use booking_types::common::User;

use crate::models as db_models;

impl From<db_models::User> for User {
    fn from(user: db_models::User) -> Self {
        User::new(user.id, user.email, user.password_hash)
    }
}

impl From<db_models::Airport> for domain_models::airport::Airport {
    fn from(row: db_models::Airport) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
            code: row.code,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
        }
    }
}

impl From<db_models::Passenger> for domain_models::passenger::Passenger {
    fn from(row: db_models::Passenger) -> Self {
        let document = row.document.0;
        Self {
            id: row.id,
            name: document.name,
            passport_number: document.passport_number,
            passenger_type: document.passenger_type,
            age: document.age,
            is_deleted: row.is_deleted,
            created_at: row.created_at,
        }
    }
}

impl From<&domain_models::passenger::Passenger> for db_models::PassengerDocument {
    fn from(passenger: &domain_models::passenger::Passenger) -> Self {
        Self {
            name: passenger.name.clone(),
            passport_number: passenger.passport_number.clone(),
            passenger_type: passenger.passenger_type,
            age: passenger.age,
        }
    }
}
