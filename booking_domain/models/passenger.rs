use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_types::{errors::DomainError, passenger::PassengerType};

/// A registered passenger, persisted as a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: i32,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Passenger {
    pub fn new(
        id: Uuid,
        name: String,
        passport_number: String,
        passenger_type: PassengerType,
        age: i32,
    ) -> Self {
        Self {
            id,
            name,
            passport_number,
            passenger_type,
            age,
            is_deleted: false,
            created_at: Utc::now(),
        }
    }

    pub fn soft_delete(&mut self) -> Result<(), DomainError> {
        if self.is_deleted {
            return Err(DomainError::AlreadyDeleted(self.id));
        }
        self.is_deleted = true;
        Ok(())
    }

    pub fn is_live(&self) -> bool {
        !self.is_deleted
    }
}
