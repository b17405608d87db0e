use thiserror::Error;
use uuid::Uuid;

/// Errors for db stuff.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Airport with ID {0} not found")]
    AirportNotFound(Uuid),

    #[error("Passenger with ID {0} not found")]
    PassengerNotFound(Uuid),

    #[error("User with ID {0} not found")]
    UserByIdNotFound(Uuid),

    #[error("Unique constraint '{0}' violated")]
    UniqueViolation(String),

    #[error("{0} must be set")]
    MissingDatabaseUrl(&'static str),

    #[error(transparent)]
    Database(sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return DbError::UniqueViolation(constraint);
            }
        }
        DbError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_stay_opaque() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Database(sqlx::Error::RowNotFound)));

        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::Database(sqlx::Error::PoolTimedOut)));
    }
}
