pub mod error;
pub mod extractors;
pub mod handlers;
mod http;

pub use error::ApiError;
pub use http::*;
