//! End-to-end tests for the Starblog API
//!
//! These tests drive the full router against an in-memory SQLite
//! database with all migrations applied, covering the cross-module
//! flows the per-handler tests don't reach.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use migration::MigratorTrait as _;
use sea_orm::Database;
use starblog::api::{AppState, app_router};
use starblog::favorites::Favorites;
use std::sync::Arc;
use tower::ServiceExt;

async fn make_app() -> Router {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    app_router(AppState {
        favorites: Arc::new(Favorites::new(db.clone())),
        db,
    })
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn sitemap_lists_every_route() {
    let app = make_app().await;

    let res = app.oneshot(empty_request(Method::GET, "/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let json = body_json(res).await;
    let paths: Vec<&str> = json["routes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap())
        .collect();

    for expected in [
        "/user",
        "/planet/{id}",
        "/people",
        "/vehiculo/{id}",
        "/favorite",
        "/users/favorites",
        "/favorite/planet/{planet_id}",
        "/favorite/{id}",
    ] {
        assert!(paths.contains(&expected), "missing route {expected}");
    }
}

#[tokio::test]
async fn fresh_database_reports_every_collection_empty() {
    let app = make_app().await;

    for uri in ["/user", "/planet", "/people", "/vehiculo", "/favorite"] {
        let res = app
            .clone()
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn favorite_lifecycle_across_modules() {
    let app = make_app().await;

    // Seed one user and one planet through the public surface.
    let res = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/user",
            serde_json::json!({"email": "luke@rebels.org", "password": "secret"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(body_json(res).await["msg"], "User added");

    let res = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/planet",
            serde_json::json!({"nombre": "Dagobah", "clima": "murky"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Bookmark the planet for the user.
    let res = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/favorite/planet/1",
            serde_json::json!({"user_id": 1}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    // Both list aliases see it.
    for uri in ["/favorite", "/users/favorites"] {
        let res = app
            .clone()
            .oneshot(empty_request(Method::GET, uri))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK, "{uri}");
        let json = body_json(res).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["planet_id"], 1);
        assert_eq!(rows[0]["user_id"], 1);
    }

    // So does the per-user view.
    let res = app
        .clone()
        .oneshot(empty_request(Method::GET, "/users/1/favorite"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await.as_array().unwrap().len(), 1);

    // Remove by target, then the collection is empty again.
    let res = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/favorite/planet/1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(empty_request(Method::GET, "/favorite"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_user_cascades_to_their_favorites() {
    let app = make_app().await;

    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/user",
            serde_json::json!({"email": "han@falcon.sw", "password": "secret"}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/vehiculo",
            serde_json::json!({"nombre": "Millennium Falcon", "asientos": 6}),
        ))
        .await
        .unwrap();
    app.clone()
        .oneshot(json_request(
            Method::POST,
            "/favorite/vehiculo/1",
            serde_json::json!({"user_id": 1}),
        ))
        .await
        .unwrap();

    let res = app
        .clone()
        .oneshot(empty_request(Method::DELETE, "/user/1"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app
        .oneshot(empty_request(Method::GET, "/favorite"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_store() {
    let app = make_app().await;

    // Missing required field: rejected by deserialization, not a 500.
    let res = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/user",
            serde_json::json!({"email": "no-password@rebels.org"}),
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was created.
    let res = app
        .oneshot(empty_request(Method::GET, "/user"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
