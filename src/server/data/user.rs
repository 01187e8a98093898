use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::fetch_page,
    model::{
        page::{Page, PageRequest},
        user::{CreateUserParams, UpdateUserParams},
    },
};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, enabled user profile owned by `owner`.
    pub async fn create(
        &self,
        owner: String,
        params: CreateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();

        entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(owner),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            enabled: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        existing: entity::user::Model,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = existing.into();
        active.username = ActiveValue::Set(params.username);
        active.email = ActiveValue::Set(params.email);
        active.first_name = ActiveValue::Set(params.first_name);
        active.last_name = ActiveValue::Set(params.last_name);
        active.enabled = ActiveValue::Set(params.enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::Owner.eq(owner))
            .one(self.db)
            .await
    }

    /// Finds a profile by its unique username.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Finds the oldest profile belonging to `owner`.
    pub async fn find_first_by_owner(
        &self,
        owner: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Owner.eq(owner))
            .order_by_asc(entity::user::Column::CreatedAt)
            .one(self.db)
            .await
    }

    pub async fn find_all_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::user::Model>, DbErr> {
        let select = entity::prelude::User::find().order_by_asc(entity::user::Column::Username);

        fetch_page(self.db, select, request).await
    }

    pub async fn find_all_by_owner_paged(
        &self,
        request: PageRequest,
        owner: &str,
    ) -> Result<Page<entity::user::Model>, DbErr> {
        let select = entity::prelude::User::find()
            .filter(entity::user::Column::Owner.eq(owner))
            .order_by_asc(entity::user::Column::Username);

        fetch_page(self.db, select, request).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_by_id_and_owner(&self, id: Uuid, owner: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::Owner.eq(owner))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
