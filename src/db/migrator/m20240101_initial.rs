use crate::entities::{prelude::*, shows};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let schema = Schema::new(backend);

        manager
            .create_table(
                schema
                    .create_table_from_entity(Venues)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Artists)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                schema
                    .create_table_from_entity(Shows)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Past/upcoming splits filter and order on start_time
        manager
            .create_index(
                Index::create()
                    .name("idx_shows_start_time")
                    .table(Shows)
                    .col(shows::Column::StartTime)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Shows).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Artists).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Venues).to_owned())
            .await?;

        Ok(())
    }
}
