//! Handlers for the `/vehicles` resource.
//!
//! Responses use [`VehicleDetail`]: the numeric `pilot_id` foreign key
//! and the resolved `pilot_name` are separate fields.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::vehicle::{CreateVehicle, VehicleDetail};
use holocron_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /vehicles
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<VehicleDetail>>> {
    let vehicles = VehicleRepo::list(&state.pool).await?;
    Ok(Json(vehicles))
}

/// GET /vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<VehicleDetail>> {
    let vehicle = VehicleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// POST /vehicles
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<Json<VehicleDetail>> {
    let vehicle = VehicleRepo::create(&state.pool, &input).await?;
    Ok(Json(vehicle))
}

/// PUT /vehicles/{id}
///
/// Full overwrite: the payload shape matches POST, every column is
/// re-assigned from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateVehicle>,
) -> AppResult<Json<VehicleDetail>> {
    let vehicle = VehicleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))?;
    Ok(Json(vehicle))
}

/// DELETE /vehicles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = VehicleRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Vehicle deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Vehicle",
            id,
        }))
    }
}
