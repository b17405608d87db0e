use uuid::Uuid;

use booking_types::{
    passenger::PassengerType,
    validation::{ValidationErrors, check, email, positive, required, required_id},
};

use crate::{cqrs::Command, dto::CreatedId};

/// Registers a new airport. `code` must not be owned by another live airport.
#[derive(Debug, Clone)]
pub struct CreateAirport {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub code: String,
}

impl CreateAirport {
    pub fn new(name: String, address: String, code: String) -> Self {
        Self::with_id(Uuid::new_v4(), name, address, code)
    }

    /// Uses an identifier chosen by the client.
    pub fn with_id(id: Uuid, name: String, address: String, code: String) -> Self {
        Self {
            id,
            name,
            address,
            code,
        }
    }
}

impl Command for CreateAirport {
    type Output = CreatedId;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([
            required_id("id", &self.id),
            required("name", &self.name),
            required("address", &self.address),
            required("code", &self.code),
        ])
    }
}

#[derive(Debug, Clone)]
pub struct DeleteAirport {
    pub id: Uuid,
}

impl Command for DeleteAirport {
    type Output = ();

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([required_id("id", &self.id)])
    }
}

#[derive(Debug, Clone)]
pub struct RegisterPassenger {
    pub id: Uuid,
    pub name: String,
    pub passport_number: String,
    pub passenger_type: PassengerType,
    pub age: i32,
}

impl RegisterPassenger {
    pub fn new(
        name: String,
        passport_number: String,
        passenger_type: PassengerType,
        age: i32,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, passport_number, passenger_type, age)
    }

    /// Uses an identifier chosen by the client.
    pub fn with_id(
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
        }
    }
}

impl Command for RegisterPassenger {
    type Output = CreatedId;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([
            required_id("id", &self.id),
            required("name", &self.name),
            required("passport_number", &self.passport_number),
            positive("age", self.age),
            check(
                self.passenger_type != PassengerType::Unknown,
                "passenger_type",
                "passenger_type must be one of Male, Female, Baby",
            ),
        ])
    }
}

#[derive(Debug, Clone)]
pub struct DeletePassenger {
    pub id: Uuid,
}

impl Command for DeletePassenger {
    type Output = ();

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([required_id("id", &self.id)])
    }
}

#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub id: Uuid,
    pub email: String,
    pub password: String,
}

impl RegisterUser {
    pub fn new(email: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password,
        }
    }
}

impl Command for RegisterUser {
    type Output = CreatedId;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::collect([
            required_id("id", &self.id),
            required("email", &self.email),
            email("email", &self.email),
            required("password", &self.password),
        ])
    }
}
