use axum::{Json, extract::State, http::StatusCode};
use axum_extra::extract::{
    SignedCookieJar, WithRejection,
    cookie::{Cookie, SameSite},
};
use serde::Deserialize;

use booking_app::{
    command_handlers::RegisterUserCommandHandler,
    cqrs::{
        commands::RegisterUser,
        queries::{AuthenticateUser, GetUserById},
    },
    dto::{CreatedId, UserDto},
    queries_handlers::{AuthenticateUserHandler, GetUserByIdHandler},
};
use booking_types::errors::FailureKind;

use crate::{
    error::ApiError,
    extractors::{CurrentUser, RequestCancellation, SESSION_COOKIE},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /identity/register
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    cancel: RequestCancellation,
    WithRejection(Json(body), _): WithRejection<Json<CredentialsRequest>, ApiError>,
) -> Result<Json<CreatedId>, ApiError> {
    let command = RegisterUser::new(body.email, body.password);
    let created = state
        .app_bus
        .execute(command, RegisterUserCommandHandler::new(), cancel.token())
        .await?;

    Ok(Json(created))
}

/// POST /identity/login – Sets the signed session cookie.
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    cancel: RequestCancellation,
    WithRejection(Json(body), _): WithRejection<Json<CredentialsRequest>, ApiError>,
) -> Result<(SignedCookieJar, Json<UserDto>), ApiError> {
    let query = AuthenticateUser {
        email: body.email,
        password: body.password,
    };
    let user = state
        .app_bus
        .query(query, AuthenticateUserHandler::new(), cancel.token())
        .await?;

    let cookie = Cookie::build((SESSION_COOKIE, user.id.to_string()))
        .path("/")
        .http_only(true)
        .secure(state.app_bus.config().secure_cookies)
        .same_site(SameSite::Lax);

    tracing::info!(user_id = %user.id, "User logged in");
    Ok((jar.add(cookie), Json(UserDto::from(&user))))
}

/// POST /identity/logout – Clears the session cookie.
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, StatusCode) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, StatusCode::NO_CONTENT)
}

/// GET /identity/me
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn me(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
) -> Result<Json<UserDto>, ApiError> {
    let query = GetUserById { id: user.id };
    let found = state
        .app_bus
        .query(query, GetUserByIdHandler::new(), cancel.token())
        .await
        .map_err(|e| match e.kind() {
            // a validly signed cookie for a user that no longer exists
            FailureKind::NotFound => ApiError::Unauthenticated,
            _ => ApiError::App(e),
        })?;

    Ok(Json(UserDto::from(&found)))
}
