pub mod common;
pub mod errors;
pub mod passenger;
pub mod validation;

pub use errors::Result;
