//! Writes one audit record per mutation of an auditable entity.

use sea_orm::DatabaseConnection;

use crate::{
    model::audit::AuditOperation,
    server::{
        data::audit::AuditRepository,
        model::audit::{AuditRecord, Auditable, CreateAuditParams},
        service::audit::diff::{compute_diff, describe},
    },
};

/// Writes one audit record per mutation on behalf of `actor`.
///
/// Recording never fails the surrounding operation: every failure is logged
/// and the record is either written without a diff or dropped.
pub struct AuditRecorder<'a> {
    db: &'a DatabaseConnection,
    actor: &'a str,
}

impl<'a> AuditRecorder<'a> {
    pub fn new(db: &'a DatabaseConnection, actor: &'a str) -> Self {
        Self { db, actor }
    }

    /// Records a mutation of an auditable entity.
    ///
    /// Updates store the field diff between `before` and `after`. Creates and
    /// deletes store no diff.
    ///
    /// # Arguments
    /// - `operation` - Kind of mutation
    /// - `before` - Snapshot before the mutation, required for updates
    /// - `after` - Snapshot after the mutation, or the deleted snapshot for deletes
    ///
    /// # Returns
    /// - `Some(AuditRecord)` - The persisted record
    /// - `None` - Persisting the record failed; the failure has been logged
    pub async fn record<T: Auditable>(
        &self,
        operation: AuditOperation,
        before: Option<&T>,
        after: &T,
    ) -> Option<AuditRecord> {
        let entity_id = after.audit_id();
        let description = describe(operation, T::TYPE_NAME, entity_id);

        let diff = match (operation, before) {
            (AuditOperation::Update, Some(before)) => {
                match serde_json::to_value(compute_diff(before, after)) {
                    Ok(value) => Some(value),
                    Err(err) => {
                        tracing::warn!("Failed to serialize diff for {}: {}", description, err);
                        None
                    }
                }
            }
            (AuditOperation::Update, None) => {
                tracing::warn!("No previous snapshot for {}, recording without diff", description);
                None
            }
            _ => None,
        };

        let params = CreateAuditParams {
            entity_type: T::ENTITY_TYPE.to_string(),
            entity_id,
            operation,
            diff,
            description,
            actor: self.actor.to_string(),
        };

        let entity = match AuditRepository::new(self.db).create(params).await {
            Ok(entity) => entity,
            Err(err) => {
                tracing::error!(
                    "Failed to record {} of {} {}: {}",
                    operation,
                    T::TYPE_NAME,
                    entity_id,
                    err
                );
                return None;
            }
        };

        match AuditRecord::from_entity(entity) {
            Ok(record) => {
                tracing::debug!("{} (actor: {})", record.description, record.actor);
                Some(record)
            }
            Err(err) => {
                tracing::error!("Failed to read back audit record: {}", err);
                None
            }
        }
    }
}
