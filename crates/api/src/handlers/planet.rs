//! Handlers for the `/planets` resource.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::planet::{CreatePlanet, Planet};
use holocron_db::repositories::PlanetRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /planets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Planet>>> {
    let planets = PlanetRepo::list(&state.pool).await?;
    Ok(Json(planets))
}

/// GET /planets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet))
}

/// POST /planets
///
/// The public contract fixes create success at 200 with the created
/// row echoed back, id included.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlanet>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::create(&state.pool, &input).await?;
    Ok(Json(planet))
}

/// PUT /planets/{id}
///
/// Full overwrite: the payload shape matches POST, every column is
/// re-assigned from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreatePlanet>,
) -> AppResult<Json<Planet>> {
    let planet = PlanetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))?;
    Ok(Json(planet))
}

/// DELETE /planets/{id}
///
/// Hard delete with no cascade: characters referencing the planet keep
/// their `planet_id` and resolve a null homeworld from then on.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = PlanetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Planet deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Planet",
            id,
        }))
    }
}
