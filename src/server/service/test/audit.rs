use chrono::NaiveDate;
use entity::prelude::{Organization, Vacation};
use test_utils::{builder::TestBuilder, factory};

use super::principal;
use crate::{
    model::vacation::VacationStatus,
    server::{
        data::{audit::AuditRepository, vacation::VacationRepository},
        error::AppError,
        model::{page::PageRequest, vacation::CreateVacationParams},
        service::{audit::AuditService, vacation::VacationService},
    },
};

/// Tests that the audit log of a caller without the all scope only holds their own actions.
///
/// Expected: alice sees her record only, an auditor with the all scope sees both
#[tokio::test]
async fn lists_own_actions_without_all_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alices = factory::create_vacation(db, "alice").await?;
    let bobs = factory::create_vacation(db, "bob").await?;

    let alice = principal("alice", &["vacations:write", "audits:read"]);
    let bob = principal("bob", &["vacations:write"]);
    VacationService::new(db, &alice).delete(alices.id).await?;
    VacationService::new(db, &bob).delete(bobs.id).await?;

    let own = AuditService::new(db, &alice)
        .get_paginated(PageRequest::default(), None)
        .await?;
    assert_eq!(own.total_elements, 1);
    assert_eq!(own.items[0].entity_id, alices.id);
    assert_eq!(own.query.as_deref(), Some("actor=alice"));

    let auditor = principal("auditor", &["audits:all:read"]);
    let all = AuditService::new(db, &auditor)
        .get_paginated(PageRequest::default(), None)
        .await?;
    assert_eq!(all.total_elements, 2);

    let bobs_record = all
        .items
        .iter()
        .find(|record| record.actor == "bob")
        .unwrap();
    assert!(matches!(
        AuditService::new(db, &alice).get_by_id(bobs_record.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests reading the audit log without any audit scope.
///
/// Expected: Err(AuthErr)
#[tokio::test]
async fn requires_audit_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["vacations:read"]);
    let result = AuditService::new(db, &alice)
        .get_paginated(PageRequest::default(), None)
        .await;

    assert!(matches!(result, Err(AppError::AuthErr(_))));

    Ok(())
}

/// Tests mutating a vacation while the audit log cannot be written.
///
/// Expected: create and delete both succeed and no audit record exists
#[tokio::test]
async fn failed_audit_write_does_not_fail_mutation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(Organization)
        .with_table(Vacation)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["vacations:write"]);
    let service = VacationService::new(db, &alice);

    let created = service
        .create(CreateVacationParams {
            owner: "alice".to_string(),
            name: "Ski Trip".to_string(),
            description: None,
            status: VacationStatus::Requested,
            from_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            to_date: NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(),
            organization_id: None,
        })
        .await?;

    let stored = VacationRepository::new(db).find_by_id(created.id).await?;
    assert!(stored.is_some());

    service.delete(created.id).await?;
    assert!(VacationRepository::new(db)
        .find_by_id(created.id)
        .await?
        .is_none());

    // The audit table was never created, so nothing can have been persisted.
    assert!(AuditRepository::new(db)
        .find_by_entity_id(created.id)
        .await
        .is_err());

    Ok(())
}
