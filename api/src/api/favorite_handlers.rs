use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use crate::favorites::FavoriteTarget;

use super::{
    ApiErr, AppState,
    dto::{AddFavoriteRequest, FavoriteResponse, MsgResponse},
};

/// Serves both `GET /favorite` and `GET /users/favorites`.
pub async fn list_favorites(
    State(state): State<AppState>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiErr> {
    let rows = state.favorites.list_all().await.map_err(ApiErr::internal)?;

    if rows.is_empty() {
        return Err(ApiErr::not_found("No favorites found"));
    }

    Ok(Json(rows.into_iter().map(FavoriteResponse::from).collect()))
}

/// Favorites of one user. An empty list is a normal response here,
/// not an error.
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FavoriteResponse>>, ApiErr> {
    let rows = state
        .favorites
        .list_for_user(id)
        .await
        .map_err(ApiErr::internal)?;

    Ok(Json(rows.into_iter().map(FavoriteResponse::from).collect()))
}

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
    kind: &str,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    state
        .favorites
        .add(user_id, target)
        .await
        .map_err(ApiErr::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(MsgResponse::new(format!("Favorite {kind} added"))),
    ))
}

async fn delete_favorite_by_target(
    state: &AppState,
    target: FavoriteTarget,
    kind: &str,
    target_id: i32,
) -> Result<Json<MsgResponse>, ApiErr> {
    let removed = state
        .favorites
        .remove_by_target(target)
        .await
        .map_err(ApiErr::internal)?;

    if !removed {
        return Err(ApiErr::not_found(format!(
            "Favorite {kind} {target_id} not found"
        )));
    }

    Ok(Json(MsgResponse::new(format!(
        "Favorite {kind} {target_id} deleted"
    ))))
}

pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    add_favorite(&state, body.user_id, FavoriteTarget::Planet(planet_id), "planet").await
}

pub async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    delete_favorite_by_target(&state, FavoriteTarget::Planet(planet_id), "planet", planet_id).await
}

pub async fn add_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    add_favorite(&state, body.user_id, FavoriteTarget::People(people_id), "people").await
}

pub async fn delete_favorite_people(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    delete_favorite_by_target(&state, FavoriteTarget::People(people_id), "people", people_id).await
}

pub async fn add_favorite_vehiculo(
    State(state): State<AppState>,
    Path(vehiculo_id): Path<i32>,
    Json(body): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    add_favorite(
        &state,
        body.user_id,
        FavoriteTarget::Vehiculo(vehiculo_id),
        "vehiculo",
    )
    .await
}

pub async fn delete_favorite_vehiculo(
    State(state): State<AppState>,
    Path(vehiculo_id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    delete_favorite_by_target(
        &state,
        FavoriteTarget::Vehiculo(vehiculo_id),
        "vehiculo",
        vehiculo_id,
    )
    .await
}

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    let removed = state
        .favorites
        .remove_by_id(id)
        .await
        .map_err(ApiErr::internal)?;

    if !removed {
        return Err(ApiErr::not_found(format!("favorite {id} not found")));
    }

    Ok(Json(MsgResponse::new(format!("favorite {id} deleted"))))
}
