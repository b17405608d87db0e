use rand::Rng;
use uuid::Uuid;

use booking_types::{common::User, passenger::PassengerType};

use crate::models::{airport::Airport, passenger::Passenger};

#[derive(Default, Clone)]
pub struct AirportFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub code: Option<&'a str>,
    pub is_deleted: Option<bool>,
}

#[derive(Default, Clone)]
pub struct PassengerFactoryOptions<'a> {
    pub id: Option<Uuid>,
    pub name: Option<&'a str>,
    pub passport_number: Option<&'a str>,
    pub passenger_type: Option<PassengerType>,
    pub age: Option<i32>,
    pub is_deleted: Option<bool>,
}

#[derive(Default, Clone)]
pub struct UserFactoryOptions {
    pub id: Option<Uuid>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

/// Three upper-case letters, like an IATA code.
pub fn random_airport_code() -> String {
    let mut rng = rand::thread_rng();
    (0..3)
        .map(|_| char::from(rng.gen_range(b'A'..=b'Z')))
        .collect()
}

pub fn airport_factory(options: AirportFactoryOptions) -> Airport {
    let code = options
        .code
        .map_or_else(random_airport_code, |s| s.to_string());
    let mut airport = Airport::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options
            .name
            .map_or_else(|| format!("{code} International"), |s| s.to_string()),
        options.address.unwrap_or("Somewhere").to_string(),
        code,
    );
    airport.is_deleted = options.is_deleted.unwrap_or(false);
    airport
}

pub fn passenger_factory(options: PassengerFactoryOptions) -> Passenger {
    let default_passport = format!("P{}", rand::thread_rng().r#gen::<u32>());
    let mut passenger = Passenger::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.name.unwrap_or("Jane Doe").to_string(),
        options
            .passport_number
            .map_or(default_passport, |s| s.to_string()),
        options.passenger_type.unwrap_or(PassengerType::Female),
        options.age.unwrap_or(30),
    );
    passenger.is_deleted = options.is_deleted.unwrap_or(false);
    passenger
}

pub fn user_factory(options: UserFactoryOptions) -> User {
    let default_email: String = format!("user_{}@example.com", rand::thread_rng().r#gen::<u32>());
    User::new(
        options.id.unwrap_or_else(Uuid::new_v4),
        options.email.unwrap_or(default_email),
        options
            .password_hash
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
    )
}
