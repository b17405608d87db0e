use dotenvy::dotenv;
use std::{env, time::Duration};

use booking_types::errors::{AppError, ApplicationError};

/// Minimum length accepted for the cookie signing secret.
pub const MIN_COOKIE_SECRET_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct Config {
    /// Path prefix every route is mounted under, e.g. `/api/v1`.
    /// Empty means the routes are mounted at the root.
    pub api_base: String,
    pub http_port: u16,
    pub auth_cookie_secret: String,
    /// Marks the session cookie `Secure`. Turn on when served over TLS.
    pub secure_cookies: bool,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ApplicationError> {
        dotenv().ok();

        let api_base = match env::var("BOOKING_API_BASE") {
            Ok(val) => normalize_base_path(&val),
            Err(_) => "/api/v1".to_string(),
        };

        let http_port = match env::var("BOOKING_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().map_err(|e| {
                AppError::InvalidConfig(format!("BOOKING_HTTP_PORT '{val}': {e}"))
            })?,
            Err(_) => 8080,
        };

        let auth_cookie_secret = env::var("BOOKING_COOKIE_SECRET").map_err(|_| {
            AppError::InvalidConfig("You need to set env BOOKING_COOKIE_SECRET".to_string())
        })?;
        if auth_cookie_secret.len() < MIN_COOKIE_SECRET_LEN {
            return Err(AppError::InvalidConfig(format!(
                "BOOKING_COOKIE_SECRET must be at least {MIN_COOKIE_SECRET_LEN} bytes long"
            ))
            .into());
        }

        let secure_cookies = match env::var("BOOKING_SECURE_COOKIES") {
            Ok(val) => parse_flag(&val).ok_or_else(|| {
                AppError::InvalidConfig(format!("BOOKING_SECURE_COOKIES '{val}' is not a boolean"))
            })?,
            Err(_) => false,
        };

        let request_timeout = match env::var("BOOKING_REQUEST_TIMEOUT_MS") {
            Ok(val) => val.parse::<u64>().unwrap_or(10_000).max(1),
            Err(_) => 10_000,
        };

        Ok(Self {
            api_base,
            http_port,
            auth_cookie_secret,
            secure_cookies,
            request_timeout: Duration::from_millis(request_timeout),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `"api/v1/"` -> `"/api/v1"`, `"/"` -> `""`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
