//! Shared fixtures for handler tests: in-memory SQLite with migrations
//! applied, plus request/response JSON helpers.

use axum::body::Body;
use axum::response::Response;
use migration::MigratorTrait as _;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use super::AppState;
use crate::favorites::Favorites;

pub async fn setup_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

pub fn make_state(db: DatabaseConnection) -> AppState {
    AppState {
        favorites: Arc::new(Favorites::new(db.clone())),
        db,
    }
}

pub fn json_body(value: serde_json::Value) -> Body {
    Body::from(serde_json::to_string(&value).unwrap())
}

pub async fn body_json(res: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
