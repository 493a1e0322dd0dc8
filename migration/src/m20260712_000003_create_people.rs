use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(People::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(People::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(People::Nombre)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(People::Genero).string().null())
                    .col(ColumnDef::new(People::Altura).integer().null())
                    .col(ColumnDef::new(People::Peso).integer().null())
                    .col(ColumnDef::new(People::Especie).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(People::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum People {
    Table,
    Id,
    Nombre,
    Genero,
    Altura,
    Peso,
    Especie,
}
