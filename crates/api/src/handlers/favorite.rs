//! Handlers for per-user favorites.
//!
//! Aggregation is an explicit per-user query (never a method on a
//! single favorites row), so one user's favorites can never leak into
//! another user's response.

use axum::extract::{Path, State};
use axum::Json;
use holocron_core::error::CoreError;
use holocron_core::types::DbId;
use holocron_db::models::favorite::{CreateFavorite, FavoriteKind, UserFavorites};
use holocron_db::repositories::{FavoriteRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::response::MessageResponse;
use crate::state::AppState;

/// 404 unless the user exists. Favorites rows require a real owner
/// even though the schema itself carries no foreign-key rule.
async fn ensure_user_exists(state: &AppState, user_id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    Ok(())
}

/// GET /users/{user_id}/favorites
///
/// Three lists of display names, scoped to this user, in insertion
/// order. All lists are empty for a user with no favorites rows.
pub async fn get_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserFavorites>> {
    ensure_user_exists(&state, user_id).await?;
    let favorites = FavoriteRepo::aggregate_for_user(&state.pool, user_id).await?;
    Ok(Json(favorites))
}

/// POST /favorites/user/{user_id}
///
/// Creates one favorites row from the body. Each call inserts a new
/// row; repeated calls with the same ids accumulate duplicates.
pub async fn create(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<CreateFavorite>,
) -> AppResult<Json<MessageResponse>> {
    ensure_user_exists(&state, user_id).await?;
    FavoriteRepo::create(&state.pool, user_id, &input).await?;
    Ok(Json(MessageResponse::new(
        "Favorites have been updated successfully",
    )))
}

/// DELETE /favorites/users/{user_id}/{type}/{id}
///
/// Removes the earliest favorites row of this user whose `{type}`
/// column (`planet`, `character`, or `vehicle`) equals `{id}`. Unknown
/// type tags 404 like a missing row.
pub async fn delete(
    State(state): State<AppState>,
    Path((user_id, tag, target_id)): Path<(DbId, String, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    ensure_user_exists(&state, user_id).await?;

    let Some(kind) = FavoriteKind::from_tag(&tag) else {
        return Err(AppError::NotFound(format!("Favorite {tag} not found")));
    };

    let deleted = FavoriteRepo::delete_by_kind(&state.pool, user_id, kind, target_id).await?;
    if deleted {
        Ok(Json(MessageResponse::new(format!(
            "Favorite {tag} deleted successfully"
        ))))
    } else {
        Err(AppError::NotFound(format!("Favorite {tag} not found")))
    }
}
