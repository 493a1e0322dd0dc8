use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::NormalizePathLayer;

use crate::favorites::Favorites;

pub mod dto;
pub mod favorite_handlers;
#[cfg(test)]
pub(crate) mod test_util;
pub mod people_handlers;
pub mod planet_handlers;
pub mod user_handlers;
pub mod vehiculo_handlers;

// ---------- shared state ----------

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub favorites: Arc<Favorites>,
}

// ---------- error type ----------

/// A JSON error response: `{"msg": "..."}` with an HTTP status.
pub struct ApiErr(StatusCode, String);

impl ApiErr {
    pub fn internal(e: impl std::fmt::Display) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self(StatusCode::CONFLICT, msg.into())
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "msg": self.1 });
        (self.0, Json(body)).into_response()
    }
}

/// Map a uniqueness violation to 409, anything else to 500.
pub(crate) fn conflict_or_internal(e: sea_orm::DbErr, msg: &str) -> ApiErr {
    let s = e.to_string();
    if s.contains("UNIQUE") || s.contains("unique") {
        ApiErr::conflict(msg)
    } else {
        ApiErr::internal(e)
    }
}

// ---------- router ----------

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route(
            "/user",
            get(user_handlers::list_users).post(user_handlers::create_user),
        )
        .route(
            "/user/{id}",
            get(user_handlers::get_user)
                .put(user_handlers::update_user)
                .delete(user_handlers::delete_user),
        )
        .route(
            "/planet",
            get(planet_handlers::list_planets).post(planet_handlers::create_planet),
        )
        .route(
            "/planet/{id}",
            get(planet_handlers::get_planet)
                .put(planet_handlers::update_planet)
                .delete(planet_handlers::delete_planet),
        )
        .route(
            "/people",
            get(people_handlers::list_people).post(people_handlers::create_people),
        )
        .route(
            "/people/{id}",
            get(people_handlers::get_people)
                .put(people_handlers::update_people)
                .delete(people_handlers::delete_people),
        )
        .route(
            "/vehiculo",
            get(vehiculo_handlers::list_vehiculos).post(vehiculo_handlers::create_vehiculo),
        )
        .route(
            "/vehiculo/{id}",
            get(vehiculo_handlers::get_vehiculo)
                .put(vehiculo_handlers::update_vehiculo)
                .delete(vehiculo_handlers::delete_vehiculo),
        )
        .route("/favorite", get(favorite_handlers::list_favorites))
        .route("/users/favorites", get(favorite_handlers::list_favorites))
        .route(
            "/users/{id}/favorite",
            get(favorite_handlers::get_user_favorites),
        )
        .route(
            "/favorite/planet/{planet_id}",
            post(favorite_handlers::add_favorite_planet)
                .delete(favorite_handlers::delete_favorite_planet),
        )
        .route(
            "/favorite/people/{people_id}",
            post(favorite_handlers::add_favorite_people)
                .delete(favorite_handlers::delete_favorite_people),
        )
        .route(
            "/favorite/vehiculo/{vehiculo_id}",
            post(favorite_handlers::add_favorite_vehiculo)
                .delete(favorite_handlers::delete_favorite_vehiculo),
        )
        .route("/favorite/{id}", delete(favorite_handlers::delete_favorite))
        .layer(CorsLayer::permissive())
        .layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(state)
}

/// Machine-readable site map, served at the root for discovery.
async fn sitemap() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "routes": [
            { "methods": ["GET"], "path": "/" },
            { "methods": ["GET", "POST"], "path": "/user" },
            { "methods": ["GET", "PUT", "DELETE"], "path": "/user/{id}" },
            { "methods": ["GET", "POST"], "path": "/planet" },
            { "methods": ["GET", "PUT", "DELETE"], "path": "/planet/{id}" },
            { "methods": ["GET", "POST"], "path": "/people" },
            { "methods": ["GET", "PUT", "DELETE"], "path": "/people/{id}" },
            { "methods": ["GET", "POST"], "path": "/vehiculo" },
            { "methods": ["GET", "PUT", "DELETE"], "path": "/vehiculo/{id}" },
            { "methods": ["GET"], "path": "/favorite" },
            { "methods": ["GET"], "path": "/users/favorites" },
            { "methods": ["GET"], "path": "/users/{id}/favorite" },
            { "methods": ["POST", "DELETE"], "path": "/favorite/planet/{planet_id}" },
            { "methods": ["POST", "DELETE"], "path": "/favorite/people/{people_id}" },
            { "methods": ["POST", "DELETE"], "path": "/favorite/vehiculo/{vehiculo_id}" },
            { "methods": ["DELETE"], "path": "/favorite/{id}" },
        ]
    }))
}
