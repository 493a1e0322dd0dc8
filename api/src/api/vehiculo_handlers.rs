use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, Set};

use crate::{entity::vehiculo, store};

use super::{
    ApiErr, AppState, conflict_or_internal,
    dto::{MsgResponse, VehiculoPayload, VehiculoResponse},
};

pub async fn list_vehiculos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehiculoResponse>>, ApiErr> {
    let rows = store::list_all::<vehiculo::Entity>(&state.db)
        .await
        .map_err(ApiErr::internal)?;

    if rows.is_empty() {
        return Err(ApiErr::not_found("No vehiculo found"));
    }

    Ok(Json(rows.into_iter().map(VehiculoResponse::from).collect()))
}

pub async fn get_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<VehiculoResponse>, ApiErr> {
    let row = store::get_by_id::<vehiculo::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Vehiculo {id} not found")))?;

    Ok(Json(VehiculoResponse::from(row)))
}

pub async fn create_vehiculo(
    State(state): State<AppState>,
    Json(body): Json<VehiculoPayload>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    vehiculo::ActiveModel {
        nombre: Set(body.nombre),
        modelo: Set(body.modelo),
        costo: Set(body.costo),
        combustible: Set(body.combustible),
        asientos: Set(body.asientos),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| conflict_or_internal(e, "Vehiculo name already exists"))?;

    Ok((StatusCode::CREATED, Json(MsgResponse::new("Vehiculo added"))))
}

pub async fn update_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<VehiculoPayload>,
) -> Result<Json<VehiculoResponse>, ApiErr> {
    let existing = store::get_by_id::<vehiculo::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Vehiculo {id} not found")))?;

    let mut active: vehiculo::ActiveModel = existing.into();
    active.nombre = Set(body.nombre);
    active.modelo = Set(body.modelo);
    active.costo = Set(body.costo);
    active.combustible = Set(body.combustible);
    active.asientos = Set(body.asientos);

    let updated = active
        .update(&state.db)
        .await
        .map_err(|e| conflict_or_internal(e, "Vehiculo name already exists"))?;

    Ok(Json(VehiculoResponse::from(updated)))
}

pub async fn delete_vehiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    store::get_by_id::<vehiculo::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Vehiculo {id} not found")))?;

    store::delete_by_id::<vehiculo::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?;

    Ok(Json(MsgResponse::new(format!("Vehiculo {id} deleted"))))
}
