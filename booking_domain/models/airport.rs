use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_types::errors::DomainError;

/// An airport served by the flight service.
///
/// `code` is the business key: at most one live airport may own a given
/// code. Airports are never removed, only flagged as deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub code: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Airport {
    /// Builds a live airport around an identifier assigned by the caller.
    pub fn new(id: Uuid, name: String, address: String, code: String) -> Self {
        Self {
            id,
            name,
            address,
            code,
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
