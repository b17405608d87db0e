use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_app::{
    command_handlers::{DeletePassengerCommandHandler, RegisterPassengerCommandHandler},
    cqrs::{
        commands::{DeletePassenger, RegisterPassenger},
        queries::GetPassengerById,
    },
    dto::{CreatedId, PassengerDto},
    queries_handlers::GetPassengerByIdHandler,
};
use booking_types::passenger::PassengerType;

use crate::{
    error::ApiError,
    extractors::{CurrentUser, RequestCancellation},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct RegisterPassengerRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub passport_number: String,
    #[serde(default)]
    pub passenger_type: PassengerType,
    #[serde(default)]
    pub age: i32,
}

#[derive(Debug, Serialize)]
pub struct PassengerResponse {
    pub passenger: PassengerDto,
}

/// POST /passenger
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn register_passenger(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Json(body), _): WithRejection<Json<RegisterPassengerRequest>, ApiError>,
) -> Result<Json<CreatedId>, ApiError> {
    let command = RegisterPassenger::with_id(
        body.id.unwrap_or_else(Uuid::new_v4),
        body.name,
        body.passport_number,
        body.passenger_type,
        body.age,
    );

    let created = state
        .app_bus
        .execute(command, RegisterPassengerCommandHandler::new(), cancel.token())
        .await?;

    Ok(Json(created))
}

/// GET /passenger/{id}
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn get_passenger(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<PassengerResponse>, ApiError> {
    let passenger = state
        .app_bus
        .query(
            GetPassengerById { id },
            GetPassengerByIdHandler::new(),
            cancel.token(),
        )
        .await?;

    Ok(Json(PassengerResponse { passenger }))
}

/// DELETE /passenger/{id}
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn delete_passenger(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<StatusCode, ApiError> {
    state
        .app_bus
        .execute(
            DeletePassenger { id },
            DeletePassengerCommandHandler::new(),
            cancel.token(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
