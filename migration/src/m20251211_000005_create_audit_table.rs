use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Audit::Table)
                    .if_not_exists()
                    .col(pk_uuid(Audit::Id))
                    .col(string(Audit::EntityType))
                    .col(uuid(Audit::EntityId))
                    .col(string_len(Audit::Operation, 16))
                    .col(json_null(Audit::Diff))
                    .col(text(Audit::Description))
                    .col(string(Audit::Actor))
                    .col(
                        timestamp_with_time_zone(Audit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_audit_entity")
                    .table(Audit::Table)
                    .col(Audit::EntityType)
                    .col(Audit::EntityId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Audit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Audit {
    Table,
    Id,
    EntityType,
    EntityId,
    Operation,
    Diff,
    Description,
    Actor,
    CreatedAt,
}
