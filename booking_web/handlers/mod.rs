mod airport_handler;
mod auth_handler;
mod passenger_handler;

pub use airport_handler::*;
pub use auth_handler::*;
pub use passenger_handler::*;
