//! Handlers for the `/characters` resource.
//!
//! Responses use [`CharacterDetail`]: the character's columns plus the
//! resolved homeworld name (null when no planet is set or the planet
//! no longer exists).

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::character::{CharacterDetail, CreateCharacter};
use holocron_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /characters
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CharacterDetail>>> {
    let characters = CharacterRepo::list(&state.pool).await?;
    Ok(Json(characters))
}

/// GET /characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// POST /characters
///
/// `planet_id` is stored verbatim; no existence check (there is no
/// foreign-key rule to satisfy).
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::create(&state.pool, &input).await?;
    Ok(Json(character))
}

/// PUT /characters/{id}
///
/// Full overwrite: the payload shape matches POST, every column is
/// re-assigned from the body.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateCharacter>,
) -> AppResult<Json<CharacterDetail>> {
    let character = CharacterRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))?;
    Ok(Json(character))
}

/// DELETE /characters/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CharacterRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Character deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }))
    }
}
