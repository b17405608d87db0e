use uuid::Uuid;

use booking_types::{
    common::User,
    validation::{ValidationErrors, required, required_id},
};

use crate::{
    cqrs::Query,
    dto::{AirportDto, PassengerDto},
};

/// Fetch a live airport by id.
pub struct GetAirportById {
    pub id: Uuid,
}

impl Query for GetAirportById {
    type Output = AirportDto;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([required_id("id", &self.id)])
    }
}

/// Fetch a live passenger by id.
pub struct GetPassengerById {
    pub id: Uuid,
}

impl Query for GetPassengerById {
    type Output = PassengerDto;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([required_id("id", &self.id)])
    }
}

/// Checks if a user is authenticated with email and password.
pub struct AuthenticateUser {
    pub email: String,
    pub password: String,
}

impl Query for AuthenticateUser {
    type Output = User;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([
            required("email", &self.email),
            required("password", &self.password),
        ])
    }
}

/// Fetch a user by id (for authenticated sessions).
pub struct GetUserById {
    pub id: Uuid,
}

impl Query for GetUserById {
    type Output = User;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([required_id("id", &self.id)])
    }
}
