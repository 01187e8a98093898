use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000002_create_organization_table::Organization;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vacation::Table)
                    .if_not_exists()
                    .col(pk_uuid(Vacation::Id))
                    .col(string(Vacation::Owner))
                    .col(string(Vacation::Name))
                    .col(text_null(Vacation::Description))
                    .col(string_len(Vacation::Status, 16))
                    .col(date(Vacation::FromDate))
                    .col(date(Vacation::ToDate))
                    .col(uuid_null(Vacation::OrganizationId))
                    .col(timestamp_with_time_zone(Vacation::CreatedAt))
                    .col(timestamp_with_time_zone(Vacation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_vacation_organization_id")
                            .from(Vacation::Table, Vacation::OrganizationId)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_vacation_owner")
                    .table(Vacation::Table)
                    .col(Vacation::Owner)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vacation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Vacation {
    Table,
    Id,
    Owner,
    Name,
    Description,
    Status,
    FromDate,
    ToDate,
    OrganizationId,
    CreatedAt,
    UpdatedAt,
}
