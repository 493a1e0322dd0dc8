pub use sea_orm_migration::prelude::*;

mod m20260712_000001_create_users;
mod m20260712_000002_create_planets;
mod m20260712_000003_create_people;
mod m20260712_000004_create_vehiculos;
mod m20260713_000005_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260712_000001_create_users::Migration),
            Box::new(m20260712_000002_create_planets::Migration),
            Box::new(m20260712_000003_create_people::Migration),
            Box::new(m20260712_000004_create_vehiculos::Migration),
            Box::new(m20260713_000005_create_favorites::Migration),
        ]
    }
}
