//! Handlers for the `/users` resource.
//!
//! Users are read-only over HTTP; rows are provisioned out of band
//! (seeding, admin tooling).

use axum::extract::State;
use axum::Json;
use holocron_db::models::user::UserResponse;
use holocron_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(users))
}
