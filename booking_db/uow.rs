use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use booking_app::{
    repository::*,
    uow::{UnitOfWork, UnitOfWorkProvider},
};
use booking_types::errors::{ApplicationError, DbError};

use crate::repository::*;

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWorkProvider {
    pool: PgPool,
}

impl PostgresUnitOfWorkProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UnitOfWorkProvider for PostgresUnitOfWorkProvider {
    async fn begin<'p>(
        &'p self,
        cancel: CancellationToken,
    ) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
        let tx = guarded(&cancel, self.pool.begin()).await?;

        // Every repository of this UoW shares the one transaction.
        let tx_arc = Arc::new(Mutex::new(tx));

        Ok(Box::new(PostgresUnitOfWork { tx: tx_arc, cancel }))
    }
}

#[derive(Debug, Clone)]
pub struct PostgresUnitOfWork<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
    cancel: CancellationToken,
}

#[async_trait::async_trait]
impl<'a> UnitOfWork<'a> for PostgresUnitOfWork<'a> {
    fn airports(&self) -> Arc<dyn AirportRepository + 'a> {
        Arc::new(PostgresAirportRepository::new(
            self.tx.clone(),
            self.cancel.clone(),
        ))
    }

    fn passengers(&self) -> Arc<dyn PassengerRepository + 'a> {
        Arc::new(PostgresPassengerRepository::new(
            self.tx.clone(),
            self.cancel.clone(),
        ))
    }

    fn users(&self) -> Arc<dyn UserRepository + 'a> {
        Arc::new(PostgresUserRepository::new(
            self.tx.clone(),
            self.cancel.clone(),
        ))
    }

    async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
        // Repositories must be gone by now; a leftover clone means the
        // transaction is dropped, and thus rolled back, instead.
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .commit()
                .await
                .map_err(|e| ApplicationError::Db(DbError::from(e)))?;
        } else {
            return Err(ApplicationError::Db(DbError::Transaction(
                "repositories still hold the transaction".to_string(),
            )));
        }
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
        if let Ok(mutex) = Arc::try_unwrap(self.tx) {
            mutex
                .into_inner()
                .rollback()
                .await
                .map_err(|e| ApplicationError::Db(DbError::from(e)))?;
        }
        Ok(())
    }
}
