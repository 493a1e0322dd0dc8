//! Generic single-table lookups shared by every catalog entity.
//!
//! Create and replace build entity-specific `ActiveModel`s, so those
//! stay with the per-entity handlers.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PrimaryKeyTrait};

pub async fn list_all<E>(db: &DatabaseConnection) -> Result<Vec<E::Model>, DbErr>
where
    E: EntityTrait,
{
    E::find().all(db).await
}

pub async fn get_by_id<E>(db: &DatabaseConnection, id: i32) -> Result<Option<E::Model>, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id).one(db).await
}

/// Delete by primary key. Returns whether a row was actually removed.
pub async fn delete_by_id<E>(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let res = E::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
