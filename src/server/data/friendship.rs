use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    model::friendship::FriendshipStatus,
    server::{
        data::fetch_page,
        model::{
            friendship::CreateFriendshipParams,
            page::{Page, PageRequest},
        },
    },
};

pub struct FriendshipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateFriendshipParams,
    ) -> Result<entity::friendship::Model, DbErr> {
        let now = Utc::now();

        entity::friendship::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(params.owner),
            friend: ActiveValue::Set(params.friend),
            status: ActiveValue::Set(params.status.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Sets the status of an existing friendship.
    pub async fn update_status(
        &self,
        existing: entity::friendship::Model,
        status: FriendshipStatus,
    ) -> Result<entity::friendship::Model, DbErr> {
        let mut active: entity::friendship::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::friendship::Model>, DbErr> {
        entity::prelude::Friendship::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<Option<entity::friendship::Model>, DbErr> {
        entity::prelude::Friendship::find_by_id(id)
            .filter(entity::friendship::Column::Owner.eq(owner))
            .one(self.db)
            .await
    }

    /// Finds the relation from `owner` to `friend`, if any.
    pub async fn find_by_owner_and_friend(
        &self,
        owner: &str,
        friend: &str,
    ) -> Result<Option<entity::friendship::Model>, DbErr> {
        entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::Owner.eq(owner))
            .filter(entity::friendship::Column::Friend.eq(friend))
            .one(self.db)
            .await
    }

    pub async fn find_all_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::friendship::Model>, DbErr> {
        let select = entity::prelude::Friendship::find()
            .order_by_asc(entity::friendship::Column::Owner)
            .order_by_asc(entity::friendship::Column::Friend);

        fetch_page(self.db, select, request).await
    }

    pub async fn find_all_by_owner_paged(
        &self,
        request: PageRequest,
        owner: &str,
    ) -> Result<Page<entity::friendship::Model>, DbErr> {
        let select = entity::prelude::Friendship::find()
            .filter(entity::friendship::Column::Owner.eq(owner))
            .order_by_asc(entity::friendship::Column::Friend);

        fetch_page(self.db, select, request).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Friendship::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_by_id_and_owner(&self, id: Uuid, owner: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Friendship::delete_many()
            .filter(entity::friendship::Column::Id.eq(id))
            .filter(entity::friendship::Column::Owner.eq(owner))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
