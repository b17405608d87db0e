use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use booking_app::repository::AirportRepository;
use booking_domain::models::airport::Airport;
use booking_types::errors::{ApplicationError, DbError};

use super::guarded;
use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresAirportRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    cancel: CancellationToken,
}

impl<'a> PostgresAirportRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>, cancel: CancellationToken) -> Self {
        Self { tx, cancel }
    }
}

#[async_trait::async_trait]
impl<'a> AirportRepository for PostgresAirportRepository<'a> {
    async fn add(&self, airport: &Airport) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let insert = sqlx::query(
            r#"
            INSERT INTO airports (id, name, address, code, is_deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(airport.id)
        .bind(&airport.name)
        .bind(&airport.address)
        .bind(&airport.code)
        .bind(airport.is_deleted)
        .bind(airport.created_at)
        .execute(&mut *tx_guard.as_mut());

        guarded(&self.cancel, insert).await?;
        Ok(())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Airport>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::Airport>(
            r#"
            SELECT id, name, address, code, is_deleted, created_at
            FROM airports
            WHERE code = $1 AND NOT is_deleted
            "#,
        )
        .bind(code)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select).await?;
        Ok(rec.map(Into::into))
    }

    async fn get_by_id(&self, airport_id: Uuid) -> Result<Airport, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::Airport>(
            r#"
            SELECT id, name, address, code, is_deleted, created_at
            FROM airports
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(airport_id)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select)
            .await?
            .ok_or(ApplicationError::Db(DbError::AirportNotFound(airport_id)))?;
        Ok(rec.into())
    }

    async fn mark_deleted(&self, airport_id: Uuid) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let update = sqlx::query(
            r#"
            UPDATE airports
            SET is_deleted = TRUE
            WHERE id = $1 AND NOT is_deleted
            "#,
        )
        .bind(airport_id)
        .execute(&mut *tx_guard.as_mut());

        let result = guarded(&self.cancel, update).await?;
        if result.rows_affected() == 0 {
            return Err(ApplicationError::Db(DbError::AirportNotFound(airport_id)));
        }
        Ok(())
    }
}
