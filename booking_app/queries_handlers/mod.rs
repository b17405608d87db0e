mod authenticate_user;
mod get_airport_by_id;
mod get_passenger_by_id;
mod get_user_by_id;

pub use authenticate_user::AuthenticateUserHandler;
pub use get_airport_by_id::GetAirportByIdHandler;
pub use get_passenger_by_id::GetPassengerByIdHandler;
pub use get_user_by_id::GetUserByIdHandler;
