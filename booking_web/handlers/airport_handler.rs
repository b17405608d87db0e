use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use booking_app::{
    command_handlers::{CreateAirportCommandHandler, DeleteAirportCommandHandler},
    cqrs::{
        commands::{CreateAirport, DeleteAirport},
        queries::GetAirportById,
    },
    dto::{AirportDto, CreatedId},
    queries_handlers::GetAirportByIdHandler,
};

use crate::{
    error::ApiError,
    extractors::{CurrentUser, RequestCancellation},
    http::AppState,
};

/// Missing fields deserialize as blank and are reported by validation.
#[derive(Debug, Deserialize)]
pub struct CreateAirportRequest {
    #[serde(default)]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct AirportResponse {
    pub airport: AirportDto,
}

/// POST /flight/airport
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn create_airport(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Json(body), _): WithRejection<Json<CreateAirportRequest>, ApiError>,
) -> Result<Json<CreatedId>, ApiError> {
    let command = match body.id {
        Some(id) => CreateAirport::with_id(id, body.name, body.address, body.code),
        None => CreateAirport::new(body.name, body.address, body.code),
    };

    let created = state
        .app_bus
        .execute(command, CreateAirportCommandHandler::new(), cancel.token())
        .await?;

    Ok(Json(created))
}

/// GET /flight/airport/{id}
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn get_airport(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<Json<AirportResponse>, ApiError> {
    let airport = state
        .app_bus
        .query(
            GetAirportById { id },
            GetAirportByIdHandler::new(),
            cancel.token(),
        )
        .await?;

    Ok(Json(AirportResponse { airport }))
}

/// DELETE /flight/airport/{id}
#[tracing::instrument(skip_all, fields(user_id = %user.id))]
pub async fn delete_airport(
    State(state): State<AppState>,
    user: CurrentUser,
    cancel: RequestCancellation,
    WithRejection(Path(id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<StatusCode, ApiError> {
    state
        .app_bus
        .execute(
            DeleteAirport { id },
            DeleteAirportCommandHandler::new(),
            cancel.token(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
