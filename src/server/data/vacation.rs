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
        vacation::{CreateVacationParams, UpdateVacationParams},
    },
};

pub struct VacationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VacationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new vacation with a fresh id.
    ///
    /// # Arguments
    /// - `params` - Owner and field values of the new vacation
    ///
    /// # Returns
    /// - `Ok(Model)` - The persisted vacation
    /// - `Err(DbErr)` - Database error, e.g. unknown organization
    pub async fn create(
        &self,
        params: CreateVacationParams,
    ) -> Result<entity::vacation::Model, DbErr> {
        let now = Utc::now();

        entity::vacation::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            owner: ActiveValue::Set(params.owner),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            status: ActiveValue::Set(params.status.to_string()),
            from_date: ActiveValue::Set(params.from_date),
            to_date: ActiveValue::Set(params.to_date),
            organization_id: ActiveValue::Set(params.organization_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Replaces the mutable fields of an existing vacation.
    ///
    /// # Arguments
    /// - `existing` - The current row, as loaded by the caller
    /// - `params` - New field values
    ///
    /// # Returns
    /// - `Ok(Model)` - The updated vacation
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        existing: entity::vacation::Model,
        params: UpdateVacationParams,
    ) -> Result<entity::vacation::Model, DbErr> {
        let mut active: entity::vacation::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.status = ActiveValue::Set(params.status.to_string());
        active.from_date = ActiveValue::Set(params.from_date);
        active.to_date = ActiveValue::Set(params.to_date);
        active.organization_id = ActiveValue::Set(params.organization_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Removes the organization link of a vacation.
    pub async fn clear_organization(
        &self,
        existing: entity::vacation::Model,
    ) -> Result<entity::vacation::Model, DbErr> {
        let mut active: entity::vacation::ActiveModel = existing.into();
        active.organization_id = ActiveValue::Set(None);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::vacation::Model>, DbErr> {
        entity::prelude::Vacation::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_id_and_owner(
        &self,
        id: Uuid,
        owner: &str,
    ) -> Result<Option<entity::vacation::Model>, DbErr> {
        entity::prelude::Vacation::find_by_id(id)
            .filter(entity::vacation::Column::Owner.eq(owner))
            .one(self.db)
            .await
    }

    /// Gets every vacation linked to an organization, regardless of owner.
    pub async fn find_all_by_organization_id(
        &self,
        organization_id: Uuid,
    ) -> Result<Vec<entity::vacation::Model>, DbErr> {
        entity::prelude::Vacation::find()
            .filter(entity::vacation::Column::OrganizationId.eq(organization_id))
            .order_by_asc(entity::vacation::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a page of all vacations, most recent start date first.
    pub async fn find_all_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::vacation::Model>, DbErr> {
        let select = entity::prelude::Vacation::find()
            .order_by_desc(entity::vacation::Column::FromDate)
            .order_by_asc(entity::vacation::Column::Id);

        fetch_page(self.db, select, request).await
    }

    /// Gets a page of the vacations owned by `owner`, most recent start date first.
    pub async fn find_all_by_owner_paged(
        &self,
        request: PageRequest,
        owner: &str,
    ) -> Result<Page<entity::vacation::Model>, DbErr> {
        let select = entity::prelude::Vacation::find()
            .filter(entity::vacation::Column::Owner.eq(owner))
            .order_by_desc(entity::vacation::Column::FromDate)
            .order_by_asc(entity::vacation::Column::Id);

        fetch_page(self.db, select, request).await
    }

    /// Deletes a vacation, returning the number of deleted rows.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = entity::prelude::Vacation::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Deletes a vacation only if it is owned by `owner`.
    pub async fn delete_by_id_and_owner(&self, id: Uuid, owner: &str) -> Result<u64, DbErr> {
        let result = entity::prelude::Vacation::delete_many()
            .filter(entity::vacation::Column::Id.eq(id))
            .filter(entity::vacation::Column::Owner.eq(owner))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
