//! HTTP-level integration tests for the `/planets` resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;
use sqlx::SqlitePool;

fn tatooine() -> serde_json::Value {
    json!({
        "name": "Tatooine",
        "terrain": "desert",
        "climate": "arid",
        "population": "200000",
        "orbital_period": 304,
        "rotation_period": 23,
        "diameter": 10465,
        "description": "desert planet",
        "image_url": null
    })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_planet_echoes_fields_with_id(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", tatooine()).await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Tatooine");
    assert_eq!(json["terrain"], "desert");
    assert_eq!(json["climate"], "arid");
    assert_eq!(json["population"], "200000");
    assert_eq!(json["orbital_period"], 304);
    assert_eq!(json["rotation_period"], 23);
    assert_eq!(json["diameter"], 10465);
    assert_eq!(json["description"], "desert planet");
    assert_eq!(json["image_url"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_planets(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/planets", tatooine()).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/planets").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Tatooine");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_planet_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/planets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_overwrites_all_fields(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/planets", tatooine()).await).await;
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({
        "name": "Hoth",
        "terrain": "ice",
        "climate": "frozen",
        "population": "unknown",
        "orbital_period": 549,
        "rotation_period": 23,
        "diameter": 7200,
        "description": "ice planet",
        "image_url": "https://example.test/hoth.png"
    });

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/planets/{id}"), replacement.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for field in [
        "name",
        "terrain",
        "climate",
        "population",
        "orbital_period",
        "rotation_period",
        "diameter",
        "description",
        "image_url",
    ] {
        assert_eq!(json[field], replacement[field], "field {field} mismatch");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn put_nonexistent_planet_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/planets/999999", tatooine()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_planet_then_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/planets", tatooine()).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/planets/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["msg"], "Planet deleted successfully");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/planets/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_planet_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/planets/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_planet_name_returns_409(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/planets", tatooine()).await;

    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", tatooine()).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_climate_is_rejected(pool: SqlitePool) {
    let mut body = tatooine();
    body["climate"] = json!("balmy");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/planets", body).await;
    // Unknown enum value fails body deserialization.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
