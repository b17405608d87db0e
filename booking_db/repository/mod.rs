mod airport_repository;
mod passenger_repository;
mod user_repository;

use std::future::Future;
use tokio_util::sync::CancellationToken;

use booking_types::errors::{ApplicationError, DbError};

pub use airport_repository::PostgresAirportRepository;
pub use passenger_repository::PostgresPassengerRepository;
pub use user_repository::PostgresUserRepository;

/// Runs a store call unless `cancel` fires first.
///
/// A call interrupted by cancellation is dropped mid-flight; the enclosing
/// transaction is then discarded with its connection.
pub(crate) async fn guarded<T, F>(
    cancel: &CancellationToken,
    call: F,
) -> Result<T, ApplicationError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    if cancel.is_cancelled() {
        return Err(ApplicationError::Cancelled);
    }

    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ApplicationError::Cancelled),
        result = call => result.map_err(|e| ApplicationError::Db(DbError::from(e))),
    }
}
