use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

use booking_types::passenger::PassengerType;

#[derive(Debug, FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub code: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, FromRow, Clone)]
pub struct Passenger {
    pub id: Uuid,
    pub document: Json<PassengerDocument>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of the `passengers.document` JSONB column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerDocument {
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: i32,
}
