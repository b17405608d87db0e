use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::{SignedCookieJar, cookie::Key};
use std::convert::Infallible;
use tokio_util::sync::{CancellationToken, DropGuard};
use uuid::Uuid;

use crate::{error::ApiError, http::AppState};

/// Signed cookie carrying the authenticated user's id.
pub const SESSION_COOKIE: &str = "user_id";

/// The authenticated caller. Rejects with 401 when the session cookie is
/// missing, unsigned, or tampered with.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub id: Uuid,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    Key: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::from_headers(&parts.headers, Key::from_ref(state));

        let id = jar
            .get(SESSION_COOKIE)
            .and_then(|cookie| Uuid::parse_str(cookie.value()).ok())
            .ok_or(ApiError::Unauthenticated)?;

        Ok(CurrentUser { id })
    }
}

/// Cancellation scope of one request.
///
/// The token is a child of the server's shutdown token and is cancelled
/// when this value is dropped, which is what happens to the handler future
/// when the client goes away.
pub struct RequestCancellation {
    token: CancellationToken,
    _guard: DropGuard,
}

impl RequestCancellation {
    pub fn new(parent: &CancellationToken) -> Self {
        let token = parent.child_token();
        let guard = token.clone().drop_guard();
        Self {
            token,
            _guard: guard,
        }
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }
}

impl FromRequestParts<AppState> for RequestCancellation {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(RequestCancellation::new(&state.shutdown))
    }
}
