mod create_airport;
mod delete_airport;
mod delete_passenger;
mod register_passenger;
mod register_user;

pub use create_airport::CreateAirportCommandHandler;
pub use delete_airport::DeleteAirportCommandHandler;
pub use delete_passenger::DeletePassengerCommandHandler;
pub use register_passenger::RegisterPassengerCommandHandler;
pub use register_user::RegisterUserCommandHandler;
