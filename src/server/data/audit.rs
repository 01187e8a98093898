use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::fetch_page,
    model::{
        audit::CreateAuditParams,
        page::{Page, PageRequest},
    },
};

/// Append-only access to audit records.
pub struct AuditRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an audit record stamped with the current time.
    pub async fn create(&self, params: CreateAuditParams) -> Result<entity::audit::Model, DbErr> {
        entity::audit::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            entity_type: ActiveValue::Set(params.entity_type),
            entity_id: ActiveValue::Set(params.entity_id),
            operation: ActiveValue::Set(params.operation.to_string()),
            diff: ActiveValue::Set(params.diff),
            description: ActiveValue::Set(params.description),
            actor: ActiveValue::Set(params.actor),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<entity::audit::Model>, DbErr> {
        entity::prelude::Audit::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_id_and_actor(
        &self,
        id: Uuid,
        actor: &str,
    ) -> Result<Option<entity::audit::Model>, DbErr> {
        entity::prelude::Audit::find_by_id(id)
            .filter(entity::audit::Column::Actor.eq(actor))
            .one(self.db)
            .await
    }

    /// Gets all records describing the entity `entity_id`, oldest first.
    pub async fn find_by_entity_id(
        &self,
        entity_id: Uuid,
    ) -> Result<Vec<entity::audit::Model>, DbErr> {
        entity::prelude::Audit::find()
            .filter(entity::audit::Column::EntityId.eq(entity_id))
            .order_by_asc(entity::audit::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Gets a page of all records, newest first.
    pub async fn find_all_paged(
        &self,
        request: PageRequest,
    ) -> Result<Page<entity::audit::Model>, DbErr> {
        let select = entity::prelude::Audit::find()
            .order_by_desc(entity::audit::Column::CreatedAt)
            .order_by_asc(entity::audit::Column::Id);

        fetch_page(self.db, select, request).await
    }

    /// Gets a page of the records written by `actor`, newest first.
    pub async fn find_all_by_actor_paged(
        &self,
        request: PageRequest,
        actor: &str,
    ) -> Result<Page<entity::audit::Model>, DbErr> {
        let select = entity::prelude::Audit::find()
            .filter(entity::audit::Column::Actor.eq(actor))
            .order_by_desc(entity::audit::Column::CreatedAt)
            .order_by_asc(entity::audit::Column::Id);

        fetch_page(self.db, select, request).await
    }
}
