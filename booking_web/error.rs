use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use booking_types::{
    errors::{ApplicationError, FailureKind},
    validation::Violation,
};

/// Every failure an endpoint can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    App(#[from] ApplicationError),

    #[error("{}", .0.body_text())]
    Json(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    Path(#[from] PathRejection),

    #[error("Authentication required")]
    Unauthenticated,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    title: &'static str,
    status: u16,
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<&'a Violation>>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::App(e) => match e.kind() {
                FailureKind::Validation => StatusCode::BAD_REQUEST,
                FailureKind::AlreadyExists => StatusCode::CONFLICT,
                FailureKind::NotFound => StatusCode::NOT_FOUND,
                FailureKind::Unauthorized => StatusCode::UNAUTHORIZED,
                FailureKind::Cancelled => StatusCode::REQUEST_TIMEOUT,
                FailureKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Json(_) | ApiError::Path(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // internals stay in the log
        let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self, "Unexpected failure: {self}");
            "An unexpected error occurred.".to_string()
        } else {
            self.to_string()
        };

        let errors = match &self {
            ApiError::App(e) => e.violations().map(|v| v.iter().collect()),
            _ => None,
        };

        let body = ErrorBody {
            title: status.canonical_reason().unwrap_or("Error"),
            status: status.as_u16(),
            detail,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
