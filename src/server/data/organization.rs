use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::fetch_page,
    model::{
        organization::{CreateOrganizationParams, UpdateOrganizationParams},
        page::{Page, PageRequest},
    },
};

pub struct OrganizationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrganizationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateOrganizationParams,
    ) -> Result<entity::organization::Model, DbErr> {
        let now = Utc::now();

        entity::organization::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(params.owner),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            enabled: ActiveValue::Set(params.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        existing: entity::organization::Model,
        params: UpdateOrganizationParams,
    ) -> Result<entity::organization::Model, DbErr> {
        let mut active: entity::organization::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.enabled = ActiveValue::Set(params.enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find_by_id(id)
            .filter(entity::organization::Column::Owner.eq(owner))
            .one(self.db)
            .await
    }

    /// Finds an organization by its unique name.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::organization::Model>, DbErr> {
        entity::prelude::Organization::find()
            .filter(entity::organization::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    /// Checks whether an organization with `id` exists.
    pub async fn exists(&self, id: Uuid) -> Result<bool, DbErr> {
        let count = entity::prelude::Organization::find_by_id(id)
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Gets a page of all organizations ordered by name.
    pub async fn find_all_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::organization::Model>, DbErr> {
        let select = entity::prelude::Organization::find()
            .order_by_asc(entity::organization::Column::Name);

        fetch_page(self.db, select, request).await
    }

    pub async fn find_all_by_owner_paged(
        &self,
        request: PageRequest,
        owner: &str,
    ) -> Result<Page<entity::organization::Model>, DbErr> {
        let select = entity::prelude::Organization::find()
            .filter(entity::organization::Column::Owner.eq(owner))
            .order_by_asc(entity::organization::Column::Name);

        fetch_page(self.db, select, request).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Organization::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn delete_by_id_and_owner(&self, id: Uuid, owner: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Organization::delete_many()
            .filter(entity::organization::Column::Id.eq(id))
            .filter(entity::organization::Column::Owner.eq(owner))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
