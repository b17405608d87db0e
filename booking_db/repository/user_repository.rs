use sqlx::{Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use booking_app::repository::UserRepository;
use booking_types::common::User;
use booking_types::errors::{ApplicationError, DbError};

use super::guarded;
use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresUserRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    cancel: CancellationToken,
}

impl<'a> PostgresUserRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>, cancel: CancellationToken) -> Self {
        Self { tx, cancel }
    }
}

#[async_trait::async_trait]
impl<'a> UserRepository for PostgresUserRepository<'a> {
    async fn add(&self, user: &User) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let insert = sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(user.password_hash())
        .execute(&mut *tx_guard.as_mut());

        guarded(&self.cancel, insert).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select).await?;
        Ok(rec.map(Into::into))
    }

    async fn get_by_id(&self, id: Uuid) -> Result<User, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let select = sqlx::query_as::<_, db_models::User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx_guard.as_mut());

        let rec = guarded(&self.cancel, select)
            .await?
            .ok_or(ApplicationError::Db(DbError::UserByIdNotFound(id)))?;
        Ok(rec.into())
    }
}
