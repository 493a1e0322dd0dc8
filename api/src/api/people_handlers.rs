use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sea_orm::{ActiveModelTrait, Set};

use crate::{entity::people, store};

use super::{
    ApiErr, AppState, conflict_or_internal,
    dto::{MsgResponse, PeoplePayload, PeopleResponse},
};

pub async fn list_people(
    State(state): State<AppState>,
) -> Result<Json<Vec<PeopleResponse>>, ApiErr> {
    let rows = store::list_all::<people::Entity>(&state.db)
        .await
        .map_err(ApiErr::internal)?;

    if rows.is_empty() {
        return Err(ApiErr::not_found("No people found"));
    }

    Ok(Json(rows.into_iter().map(PeopleResponse::from).collect()))
}

pub async fn get_people(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PeopleResponse>, ApiErr> {
    let row = store::get_by_id::<people::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("People {id} not found")))?;

    Ok(Json(PeopleResponse::from(row)))
}

pub async fn create_people(
    State(state): State<AppState>,
    Json(body): Json<PeoplePayload>,
) -> Result<(StatusCode, Json<MsgResponse>), ApiErr> {
    people::ActiveModel {
        nombre: Set(body.nombre),
        genero: Set(body.genero),
        altura: Set(body.altura),
        peso: Set(body.peso),
        especie: Set(body.especie),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| conflict_or_internal(e, "People name already exists"))?;

    Ok((StatusCode::CREATED, Json(MsgResponse::new("People added"))))
}

pub async fn update_people(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<PeoplePayload>,
) -> Result<Json<PeopleResponse>, ApiErr> {
    let existing = store::get_by_id::<people::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("People {id} not found")))?;

    let mut active: people::ActiveModel = existing.into();
    active.nombre = Set(body.nombre);
    active.genero = Set(body.genero);
    active.altura = Set(body.altura);
    active.peso = Set(body.peso);
    active.especie = Set(body.especie);

    let updated = active
        .update(&state.db)
        .await
        .map_err(|e| conflict_or_internal(e, "People name already exists"))?;

    Ok(Json(PeopleResponse::from(updated)))
}

pub async fn delete_people(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MsgResponse>, ApiErr> {
    store::get_by_id::<people::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?
        .ok_or_else(|| ApiErr::not_found(format!("People {id} not found")))?;

    store::delete_by_id::<people::Entity>(&state.db, id)
        .await
        .map_err(ApiErr::internal)?;

    Ok(Json(MsgResponse::new(format!("People {id} deleted"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::{body_json, json_body, make_state, setup_db};
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn make_router(state: AppState) -> Router {
        Router::new()
            .route("/people", axum::routing::get(list_people).post(create_people))
            .route(
                "/people/{id}",
                axum::routing::get(get_people)
                    .put(update_people)
                    .delete(delete_people),
            )
            .with_state(state)
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let router = make_router(make_state(setup_db().await));

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/people/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await["msg"], "People 3 not found");
    }

    #[tokio::test]
    async fn create_then_list_round_trips_optional_fields() {
        let router = make_router(make_state(setup_db().await));

        let res = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/people")
                    .header("Content-Type", "application/json")
                    .body(json_body(serde_json::json!({
                        "nombre": "Chewbacca",
                        "altura": 228,
                        "especie": "Wookiee"
                    })))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/people")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["nombre"], "Chewbacca");
        assert_eq!(rows[0]["altura"], 228);
        assert!(rows[0]["genero"].is_null());
        assert!(rows[0]["peso"].is_null());
    }

    #[tokio::test]
    async fn replace_persists_submitted_values() {
        let router = make_router(make_state(setup_db().await));

        router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/people")
                    .header("Content-Type", "application/json")
                    .body(json_body(serde_json::json!({"nombre": "Ben"})))
                    .unwrap(),
            )
            .await
            .unwrap();

        let res = router
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/people/1")
                    .header("Content-Type", "application/json")
                    .body(json_body(serde_json::json!({
                        "nombre": "Obi-Wan Kenobi",
                        "genero": "male"
                    })))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let res = router
            .oneshot(
                Request::builder()
                    .uri("/people/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(res).await;
        assert_eq!(json["nombre"], "Obi-Wan Kenobi");
        assert_eq!(json["genero"], "male");
    }
}
