use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, Set};

use crate::{entity::planet, store};

use super::{
    ApiErr, AppState, conflict_or_internal,
    dto::{MsgResponse, PlanetPayload, PlanetResponse},
};

pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiErr> {
    let planets = store::list_all::<planet::Entity>(&state.db)
        .await
        .map_err(ApiErr::internal)?;

    if planets.is_empty() {
        return Err(ApiErr::not_found("No planets found"));
    }

    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PlanetResponse>, ApiErr> {
    let planet = store::get_by_id::<planet::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Planet {id} not found")))?;

    Ok(Json(PlanetResponse::from(planet)))
}

pub async fn create_planet(
    State(state): State<AppState>,
    Json(body): Json<PlanetPayload>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    planet::ActiveModel {
        nombre: Set(body.nombre),
        clima: Set(body.clima),
        terreno: Set(body.terreno),
        poblacion: Set(body.poblacion),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| conflict_or_internal(e, "Planet name already exists"))?;

    Ok((StatusCode::CREATED, Json(MsgResponse::new("Planet added"))))
}

pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<PlanetPayload>,
) -> Result<Json<PlanetResponse>, ApiErr> {
    let existing = store::get_by_id::<planet::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Planet {id} not found")))?;

    let mut active: planet::ActiveModel = existing.into();
    active.nombre = Set(body.nombre);
    active.clima = Set(body.clima);
    active.terreno = Set(body.terreno);
    active.poblacion = Set(body.poblacion);

    let updated = active
        .update(&state.db)
        .await
        .map_err(|e| conflict_or_internal(e, "Planet name already exists"))?;

    Ok(Json(PlanetResponse::from(updated)))
}

pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    store::get_by_id::<planet::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("Planet {id} not found")))?;

    store::delete_by_id::<planet::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?;

    Ok(Json(MsgResponse::new(format!("Planet {id} deleted"))))
}
