use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehiculo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehiculo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Vehiculo::Nombre)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehiculo::Modelo).string().null())
                    .col(ColumnDef::new(Vehiculo::Costo).integer().null())
                    .col(ColumnDef::new(Vehiculo::Combustible).integer().null())
                    .col(ColumnDef::new(Vehiculo::Asientos).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehiculo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vehiculo {
    Table,
    Id,
    Nombre,
    Modelo,
    Costo,
    Combustible,
    Asientos,
}
