//! HTTP-level integration tests for the `/characters` resource,
//! including homeworld name resolution.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

fn luke(planet_id: Option<i64>) -> serde_json::Value {
    json!({
        "name": "Luke Skywalker",
        "gender": "male",
        "birth_year": "19BBY",
        "height": 172,
        "hair_color": "blond",
        "eye_color": "blue",
        "description": "farm boy",
        "image_url": null,
        "planet_id": planet_id
    })
}

async fn create_planet(pool: &SqlitePool, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let body = json!({
        "name": name,
        "terrain": "desert",
        "climate": "arid",
        "population": "200000",
        "orbital_period": 304,
        "rotation_period": 23,
        "diameter": 10465,
        "description": "desert planet",
        "image_url": null
    });
    let created = body_json(post_json(app, "/planets", body).await).await;
    created["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_character_resolves_homeworld(pool: SqlitePool) {
    let planet_id = create_planet(&pool, "Tatooine").await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/characters", luke(Some(planet_id))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["planet_id"], planet_id);
    assert_eq!(json["homeworld"], "Tatooine");
    assert_eq!(json["gender"], "male");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn character_without_planet_has_null_homeworld(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/characters", luke(None)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["planet_id"], serde_json::Value::Null);
    assert_eq!(json["homeworld"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn deleting_homeworld_nulls_resolution_but_keeps_fk(pool: SqlitePool) {
    let planet_id = create_planet(&pool, "Alderaan").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/characters", luke(Some(planet_id))).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/planets/{planet_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    // No cascade: the character survives with its planet_id intact,
    // but the homeworld no longer resolves.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/characters/{id}")).await).await;
    assert_eq!(json["planet_id"], planet_id);
    assert_eq!(json["homeworld"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn gender_not_applicable_round_trips(pool: SqlitePool) {
    let mut body = luke(None);
    body["name"] = json!("R2-D2");
    body["gender"] = json!("n/a");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/characters", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["gender"], "n/a");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_character(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/characters", luke(None)).await).await;
    let id = created["id"].as_i64().unwrap();

    let mut replacement = luke(None);
    replacement["hair_color"] = json!("grey");
    replacement["description"] = json!("jedi master");

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/characters/{id}"), replacement).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["hair_color"], "grey");
    assert_eq!(json["description"], "jedi master");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_character_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/characters/999999", luke(None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_character_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/characters/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
