use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(pk_uuid(Friendship::Id))
                    .col(string(Friendship::Owner))
                    .col(string(Friendship::Friend))
                    .col(string_len(Friendship::Status, 16))
                    .col(timestamp_with_time_zone(Friendship::CreatedAt))
                    .col(timestamp_with_time_zone(Friendship::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One relation per (owner, friend) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_friendship_owner_friend")
                    .table(Friendship::Table)
                    .col(Friendship::Owner)
                    .col(Friendship::Friend)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendship {
    Table,
    Id,
    Owner,
    Friend,
    Status,
    CreatedAt,
    UpdatedAt,
}
