use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use std::sync::LazyLock;
use tokio::task::{JoinError, spawn_blocking};
use uuid::Uuid;

use booking_types::{
    Result,
    errors::{AppError, ApplicationError},
};

// Stands in for the stored hash of an unknown account. Nobody knows its password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password(&Uuid::new_v4().to_string()).ok());

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hashed = Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string();
    Ok(hashed)
}

/// Fails with `PasswordError` on mismatch and `PasswordHash` if `hash`
/// is not a valid PHC string.
pub fn verify_password(hash: &str, password: &str) -> Result<(), AppError> {
    let parsed_hash = PasswordHash::new(hash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::PasswordError)
}

/// `hash_password` on the blocking pool.
pub async fn hash_password_off_worker(password: String) -> Result<String, ApplicationError> {
    let hashed = spawn_blocking(move || hash_password(&password))
        .await
        .map_err(hashing_task_failed)??;
    Ok(hashed)
}

/// Checks `password` against the stored `hash` on the blocking pool.
///
/// With no stored hash the password is still checked against a throwaway
/// hash, so an unknown account costs as much as a wrong password. Every
/// mismatch is `WrongAuthCredentials`.
pub async fn verify_credentials(
    hash: Option<String>,
    password: String,
) -> Result<(), ApplicationError> {
    let known = hash.is_some();
    let verified = spawn_blocking(move || {
        match hash.as_deref().or_else(|| DUMMY_HASH.as_deref()) {
            Some(hash) => verify_password(hash, &password).is_ok(),
            None => false,
        }
    })
    .await
    .map_err(hashing_task_failed)?;

    if known && verified {
        Ok(())
    } else {
        Err(AppError::WrongAuthCredentials.into())
    }
}

fn hashing_task_failed(err: JoinError) -> ApplicationError {
    ApplicationError::Infrastructure(format!("password hashing task failed: {err}"))
}
