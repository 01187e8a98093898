use crate::{
    model::audit::AuditOperation,
    server::{
        data::audit::AuditRepository,
        model::{audit::CreateAuditParams, page::PageRequest},
    },
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;
use uuid::Uuid;

fn params(actor: &str, entity_id: Uuid, operation: AuditOperation) -> CreateAuditParams {
    CreateAuditParams {
        entity_type: "vacation_planner::Vacation".to_string(),
        entity_id,
        operation,
        diff: None,
        description: format!("{} Vacation with uuid {}.", operation.verb(), entity_id),
        actor: actor.to_string(),
    }
}

/// Tests inserting an audit record with a diff.
///
/// Expected: Ok with the operation tag and the diff stored as JSON
#[tokio::test]
async fn creates_audit_record() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity_id = Uuid::new_v4();
    let mut create = params("alice", entity_id, AuditOperation::Update);
    create.diff = Some(serde_json::json!({"name": {"from": "a", "to": "b"}}));

    let repo = AuditRepository::new(db);
    let record = repo.create(create).await?;

    assert_eq!(record.operation, "UPDATE");
    assert_eq!(record.entity_id, entity_id);
    assert_eq!(record.actor, "alice");
    assert_eq!(
        record.diff,
        Some(serde_json::json!({"name": {"from": "a", "to": "b"}}))
    );

    Ok(())
}

/// Tests actor-scoped lookups and paging.
///
/// Expected: actor filters hide other actors' records
#[tokio::test]
async fn scopes_by_actor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditRepository::new(db);
    let entity_id = Uuid::new_v4();
    let own = repo
        .create(params("alice", entity_id, AuditOperation::Create))
        .await?;
    repo.create(params("alice", entity_id, AuditOperation::Update))
        .await?;
    let foreign = repo
        .create(params("bob", Uuid::new_v4(), AuditOperation::Create))
        .await?;

    let page = repo
        .find_all_by_actor_paged(PageRequest::default(), "alice")
        .await?;
    assert_eq!(page.total_elements, 2);

    let all = repo.find_all_paged(PageRequest::default()).await?;
    assert_eq!(all.total_elements, 3);

    assert!(repo.find_by_id_and_actor(own.id, "alice").await?.is_some());
    assert!(repo
        .find_by_id_and_actor(foreign.id, "alice")
        .await?
        .is_none());
    assert!(repo.find_by_id(foreign.id).await?.is_some());

    assert_eq!(repo.find_by_entity_id(entity_id).await?.len(), 2);

    Ok(())
}
