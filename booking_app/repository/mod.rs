mod airport_repository;
mod passenger_repository;
mod user_repository;

pub use airport_repository::AirportRepository;
pub use passenger_repository::PassengerRepository;
pub use user_repository::UserRepository;
