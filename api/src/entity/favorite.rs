use sea_orm::entity::prelude::*;

/// One user's bookmark of a single catalog entity.
///
/// The row keeps one nullable column per target kind; domain code only
/// creates rows through `crate::favorites::FavoriteTarget`, which sets
/// exactly one of them.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    pub vehiculo_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Planet,
    #[sea_orm(
        belongs_to = "super::people::Entity",
        from = "Column::PeopleId",
        to = "super::people::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    People,
    #[sea_orm(
        belongs_to = "super::vehiculo::Entity",
        from = "Column::VehiculoId",
        to = "super::vehiculo::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Vehiculo,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::people::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::People.def()
    }
}

impl Related<super::vehiculo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehiculo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
