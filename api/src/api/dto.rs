use serde::{Deserialize, Serialize};

use crate::entity::{favorite, people, planet, user, vehiculo};

// ---------- shared ----------

/// Confirmation envelope used by mutations and error responses.
#[derive(Debug, Serialize)]
pub struct MsgResponse {
    pub msg: String,
}

impl MsgResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

// ---------- user ----------

/// Full body for both create and replace.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub email: String,
    pub password: String,
}

/// Password and active flag are never serialized back out.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<user::Model> for UserResponse {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            email: m.email,
        }
    }
}

// ---------- planet ----------

#[derive(Debug, Deserialize)]
pub struct PlanetPayload {
    pub nombre: String,
    pub clima: Option<String>,
    pub terreno: Option<String>,
    pub poblacion: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub nombre: String,
    pub clima: Option<String>,
    pub terreno: Option<String>,
    pub poblacion: Option<i32>,
}

impl From<planet::Model> for PlanetResponse {
    fn from(m: planet::Model) -> Self {
        Self {
            id: m.id,
            nombre: m.nombre,
            clima: m.clima,
            terreno: m.terreno,
            poblacion: m.poblacion,
        }
    }
}

// ---------- people ----------

#[derive(Debug, Deserialize)]
pub struct PeoplePayload {
    pub nombre: String,
    pub genero: Option<String>,
    pub altura: Option<i32>,
    pub peso: Option<i32>,
    pub especie: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PeopleResponse {
    pub id: i32,
    pub nombre: String,
    pub genero: Option<String>,
    pub altura: Option<i32>,
    pub peso: Option<i32>,
    pub especie: Option<String>,
}

impl From<people::Model> for PeopleResponse {
    fn from(m: people::Model) -> Self {
        Self {
            id: m.id,
            nombre: m.nombre,
            genero: m.genero,
            altura: m.altura,
            peso: m.peso,
            especie: m.especie,
        }
    }
}

// ---------- vehiculo ----------

#[derive(Debug, Deserialize)]
pub struct VehiculoPayload {
    pub nombre: String,
    pub modelo: Option<String>,
    pub costo: Option<i32>,
    pub combustible: Option<i32>,
    pub asientos: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct VehiculoResponse {
    pub id: i32,
    pub nombre: String,
    pub modelo: Option<String>,
    pub costo: Option<i32>,
    pub combustible: Option<i32>,
    pub asientos: Option<i32>,
}

impl From<vehiculo::Model> for VehiculoResponse {
    fn from(m: vehiculo::Model) -> Self {
        Self {
            id: m.id,
            nombre: m.nombre,
            modelo: m.modelo,
            costo: m.costo,
            combustible: m.combustible,
            asientos: m.asientos,
        }
    }
}

// ---------- favorite ----------

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub user_id: i32,
}

#[derive(Debug, Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
}

impl From<favorite::Model> for FavoriteResponse {
    fn from(m: favorite::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            planet_id: m.planet_id,
            people_id: m.people_id,
            vehiculo_id: m.vehiculo_id,
        }
    }
}
