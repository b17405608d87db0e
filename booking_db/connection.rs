use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use booking_types::errors::DbError;

pub type DbPool = PgPool;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub async fn establish_connection_pool() -> Result<DbPool, DbError> {
    init_connection_pool("DATABASE_URL").await
}

pub async fn establish_test_connection_pool() -> Result<DbPool, DbError> {
    init_connection_pool("TEST_DATABASE_URL").await
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("../migrations").run(pool).await?;
    Ok(())
}

async fn init_connection_pool(database_env: &'static str) -> Result<DbPool, DbError> {
    dotenvy::dotenv().ok();

    let database_url =
        env::var(database_env).map_err(|_| DbError::MissingDatabaseUrl(database_env))?;
    let max_connections = env::var("BOOKING_DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|val| val.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_CONNECTIONS);

    tracing::debug!(database_env, max_connections, "Connecting to Postgres");
    Ok(PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?)
}
