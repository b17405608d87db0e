use sqlx::{Postgres, Transaction, types::Json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use booking_app::repository::PassengerRepository;
use booking_domain::models::passenger::Passenger;
use booking_types::errors::{ApplicationError, DbError};

use super::guarded;
use crate::models::{self as db_models, PassengerDocument};

/// Passengers are stored whole in a JSONB `document` column; only the id
/// and the soft-delete flag live outside it.
#[derive(Clone)]
pub struct PostgresPassengerRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    cancel: CancellationToken,
}

impl<'a> PostgresPassengerRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>, cancel: CancellationToken) -> Self {
        Self { tx, cancel }
    }
}

#[async_trait::async_trait]
impl<'a> PassengerRepository for PostgresPassengerRepository<'a> {
    async fn add(&self, passenger: &Passenger) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let insert = sqlx::query(
            r#"
            INSERT INTO passengers (id, document, is_deleted, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(passenger.id)
        .bind(Json(PassengerDocument::from(passenger)))
        .bind(passenger.is_deleted)
        .bind(passenger.created_at)
        .execute(&mut *tx_guard.as_mut());

        guarded(&self.cancel, insert).await?;
        Ok(())
    }

    async fn find_by_passport_number(
        &self,
        passport_number: &str,
    ) -> Result<Option<Passenger>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::Passenger>(
            r#"
            SELECT id, document, is_deleted, created_at
            FROM passengers
            WHERE document->>'passport_number' = $1 AND NOT is_deleted
            "#,
        )
        .bind(passport_number)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select).await?;
        Ok(rec.map(Into::into))
    }

    async fn get_by_id(&self, passenger_id: Uuid) -> Result<Passenger, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::Passenger>(
            r#"
            SELECT id, document, is_deleted, created_at
            FROM passengers
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(passenger_id)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select)
            .await?
            .ok_or(ApplicationError::Db(DbError::PassengerNotFound(passenger_id)))?;
        Ok(rec.into())
    }

    async fn mark_deleted(&self, passenger_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let update = sqlx::query(
            r#"
            UPDATE passengers
            SET is_deleted = TRUE
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(passenger_id)
        .execute(&mut *tx_guard.as_mut());

        let result = guarded(&self.cancel, update).await?;
        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::PassengerNotFound(passenger_id)));
        }
        Ok(())
    }
}
