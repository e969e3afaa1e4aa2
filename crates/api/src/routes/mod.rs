pub mod health;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{character, favorite, planet, user, vehicle};
use crate::state::AppState;

/// Build the public route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                                  list users
/// /users/{user_id}/favorites              aggregated favorites for one user
///
/// /favorites/user/{user_id}               create a favorites row (POST)
/// /favorites/users/{user_id}/{type}/{id}  delete a favorites row by type (DELETE)
///
/// /characters                             list, create
/// /characters/{id}                        get, update, delete
///
/// /planets                                list, create
/// /planets/{id}                           get, update, delete
///
/// /vehicles                               list, create
/// /vehicles/{id}                          get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    let user_routes = Router::new()
        .route("/", get(user::list))
        .route("/{user_id}/favorites", get(favorite::get_for_user));

    // The favorites write paths are part of the published contract,
    // singular/plural mismatch included.
    let favorite_routes = Router::new()
        .route("/user/{user_id}", post(favorite::create))
        .route("/users/{user_id}/{type}/{id}", delete(favorite::delete));

    let character_routes = Router::new()
        .route("/", get(character::list).post(character::create))
        .route(
            "/{id}",
            get(character::get_by_id)
                .put(character::update)
                .delete(character::delete),
        );

    let planet_routes = Router::new()
        .route("/", get(planet::list).post(planet::create))
        .route(
            "/{id}",
            get(planet::get_by_id)
                .put(planet::update)
                .delete(planet::delete),
        );

    let vehicle_routes = Router::new()
        .route("/", get(vehicle::list).post(vehicle::create))
        .route(
            "/{id}",
            get(vehicle::get_by_id)
                .put(vehicle::update)
                .delete(vehicle::delete),
        );

    Router::new()
        .nest("/users", user_routes)
        .nest("/favorites", favorite_routes)
        .nest("/characters", character_routes)
        .nest("/planets", planet_routes)
        .nest("/vehicles", vehicle_routes)
}
