use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, Set};

use crate::{entity::user, store};

use super::{
    ApiErr, AppState, conflict_or_internal,
    dto::{MsgResponse, UserPayload, UserResponse},
};

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiErr> {
    let users = store::list_all::<user::Entity>(&state.db)
        .await
        .map_err(ApiErr::internal)?;

    if users.is_empty() {
        return Err(ApiErr::not_found("No users found"));
    }

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiErr> {
    let user = store::get_by_id::<user::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("User {id} not found")))?;

    Ok(Json(UserResponse::from(user)))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserPayload>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    user::ActiveModel {
        email: Set(body.email),
        password: Set(body.password),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| conflict_or_internal(e, "Email already exists"))?;

    Ok((StatusCode::CREATED, Json(MsgResponse::new("User added"))))
}

/// Full replace; the active flag is reset to true like on creation.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UserPayload>,
) -> Result<Json<UserResponse>, ApiErr> {
    let existing = store::get_by_id::<user::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("User {id} not found")))?;

    let mut active: user::ActiveModel = existing.into();
    active.email = Set(body.email);
    active.password = Set(body.password);
    active.is_active = Set(true);

    let updated = active
        .update(&state.db)
        .await
        .map_err(|e| conflict_or_internal(e, "Email already exists"))?;

    Ok(Json(UserResponse::from(updated)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    store::get_by_id::<user::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("User {id} not found")))?;

    store::delete_by_id::<user::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?;

    Ok(Json(MsgResponse::new(format!("User {id} deleted"))))
}
