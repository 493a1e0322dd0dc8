use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entity::favorite;

/// The one entity a bookmark points at.
///
/// Favorite rows are only ever built from this enum, so exactly one of
/// the three target columns is set per row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Planet(i32),
    People(i32),
    Vehiculo(i32),
}

impl FavoriteTarget {
    fn column(self) -> favorite::Column {
        match self {
            FavoriteTarget::Planet(_) => favorite::Column::PlanetId,
            FavoriteTarget::People(_) => favorite::Column::PeopleId,
            FavoriteTarget::Vehiculo(_) => favorite::Column::VehiculoId,
        }
    }

    fn target_id(self) -> i32 {
        match self {
            FavoriteTarget::Planet(id)
            | FavoriteTarget::People(id)
            | FavoriteTarget::Vehiculo(id) => id,
        }
    }
}

/// Bookmark operations against the favorite table.
pub struct Favorites {
    db: DatabaseConnection,
}

impl Favorites {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_all(&self) -> Result<Vec<favorite::Model>, DbErr> {
        favorite::Entity::find().all(&self.db).await
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<favorite::Model>, DbErr> {
        favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<favorite::Model>, DbErr> {
        favorite::Entity::find_by_id(id).one(&self.db).await
    }

    /// Insert a bookmark with exactly one target column set.
    ///
    /// Neither the user nor the target is looked up first; referential
    /// integrity is the storage layer's job.
    pub async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<favorite::Model, DbErr> {
        let mut row = favorite::ActiveModel {
            user_id: Set(Some(user_id)),
            ..Default::default()
        };
        match target {
            FavoriteTarget::Planet(id) => row.planet_id = Set(Some(id)),
            FavoriteTarget::People(id) => row.people_id = Set(Some(id)),
            FavoriteTarget::Vehiculo(id) => row.vehiculo_id = Set(Some(id)),
        }
        row.insert(&self.db).await
    }

    /// Remove the lowest-id bookmark referencing the target, if any.
    /// At most one row is removed even when several users bookmarked
    /// the same target. Returns whether a row was removed.
    pub async fn remove_by_target(&self, target: FavoriteTarget) -> Result<bool, DbErr> {
        let found = favorite::Entity::find()
            .filter(target.column().eq(target.target_id()))
            .order_by_asc(favorite::Column::Id)
            .one(&self.db)
            .await?;

        match found {
            Some(row) => {
                favorite::Entity::delete_by_id(row.id).exec(&self.db).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete by primary key. Returns whether a row was removed.
    pub async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let res = favorite::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
