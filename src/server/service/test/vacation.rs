use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use super::principal;
use crate::{
    model::{audit::AuditOperation, vacation::VacationStatus},
    server::{
        data::audit::AuditRepository,
        error::{auth::AuthError, AppError},
        model::{
            audit::AuditRecord,
            page::PageRequest,
            vacation::{CreateVacationParams, UpdateVacationParams},
        },
        service::vacation::VacationService,
    },
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn create_params(owner: &str) -> CreateVacationParams {
    CreateVacationParams {
        owner: owner.to_string(),
        name: "Ski Trip".to_string(),
        description: None,
        status: VacationStatus::Requested,
        from_date: date(2025, 1, 10),
        to_date: date(2025, 1, 17),
        organization_id: None,
    }
}

/// Tests that callers with only the own read scope cannot list someone else's vacations.
///
/// Expected: Ok with only alice's vacation, tagged with her owner filter
#[tokio::test]
async fn lists_only_own_vacations_without_all_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_vacation(db, "alice").await?;
    factory::create_vacation(db, "bob").await?;

    let alice = principal("alice", &["vacations:read"]);
    let page = VacationService::new(db, &alice)
        .get_paginated(PageRequest::default(), Some("bob".to_string()))
        .await?;

    assert_eq!(page.total_elements, 1);
    assert_eq!(page.items[0].id, own.id);
    assert_eq!(page.query.as_deref(), Some("owner=alice"));

    Ok(())
}

/// Tests listing with the all scope, with and without an owner filter.
///
/// Expected: Ok with every vacation when unfiltered and only bob's when filtered
#[tokio::test]
async fn lists_every_vacation_with_all_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_vacation(db, "alice").await?;
    factory::create_vacation(db, "bob").await?;

    let admin = principal("admin", &["SCOPE_vacations:all:read"]);
    let service = VacationService::new(db, &admin);

    let all = service.get_paginated(PageRequest::default(), None).await?;
    assert_eq!(all.total_elements, 2);
    assert!(all.query.is_none());

    let bobs = service
        .get_paginated(PageRequest::default(), Some("bob".to_string()))
        .await?;
    assert_eq!(bobs.total_elements, 1);
    assert_eq!(bobs.items[0].owner, "bob");

    Ok(())
}

/// Tests reading a vacation owned by another subject.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn hides_foreign_vacation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bobs = factory::create_vacation(db, "bob").await?;

    let alice = principal("alice", &["vacations:read"]);
    let result = VacationService::new(db, &alice).get_by_id(bobs.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating without any write scope.
///
/// Expected: Err(MissingScope) naming the own write scope, nothing persisted
#[tokio::test]
async fn create_requires_write_scope() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["vacations:read"]);
    let service = VacationService::new(db, &alice);

    let result = service.create(create_params("alice")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingScope { ref scope, .. })) if scope == "vacations:write"
    ));

    let page = service.get_paginated(PageRequest::default(), None).await?;
    assert_eq!(page.total_elements, 0);

    Ok(())
}

/// Tests creating a vacation that ends before it starts.
///
/// Expected: Err(Validation) on field toDate
#[tokio::test]
async fn create_rejects_inverted_dates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["vacations:write"]);
    let mut params = create_params("alice");
    params.to_date = date(2025, 1, 1);

    let result = VacationService::new(db, &alice).create(params).await;

    assert!(matches!(result, Err(AppError::Validation { ref field, .. }) if field == "toDate"));

    Ok(())
}

/// Tests creating a vacation linked to an organization that does not exist.
///
/// Expected: Err(Validation) on field organizationId
#[tokio::test]
async fn create_rejects_unknown_organization() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["vacations:write"]);
    let mut params = create_params("alice");
    params.organization_id = Some(Uuid::new_v4());

    let result = VacationService::new(db, &alice).create(params).await;

    assert!(
        matches!(result, Err(AppError::Validation { ref field, .. }) if field == "organizationId")
    );

    Ok(())
}

/// Tests that creating a vacation writes a CREATE audit record without diff.
///
/// Expected: Ok with one audit record by alice describing the creation
#[tokio::test]
async fn create_records_audit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db, "alice").await?;

    let alice = principal("alice", &["vacations:write"]);
    let mut params = create_params("alice");
    params.organization_id = Some(organization.id);

    let vacation = VacationService::new(db, &alice).create(params).await?;

    assert_eq!(vacation.owner, "alice");
    assert_eq!(vacation.organization_id, Some(organization.id));

    let records = AuditRepository::new(db).find_by_entity_id(vacation.id).await?;
    assert_eq!(records.len(), 1);

    let record = AuditRecord::from_entity(records[0].clone())?;
    assert_eq!(record.operation, AuditOperation::Create);
    assert_eq!(record.actor, "alice");
    assert!(record.diff.is_none());
    assert_eq!(
        record.description,
        format!("Create Vacation with uuid {}.", vacation.id)
    );

    Ok(())
}

/// Tests an update of someone else's vacation by a caller holding the all write scope.
///
/// Expected: Ok with an UPDATE audit record whose diff holds only the renamed field
#[tokio::test]
async fn update_with_all_scope_records_diff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::vacation::VacationFactory::new(db, "bob")
        .name("Ski Trip")
        .dates(date(2025, 1, 10), date(2025, 1, 17))
        .build()
        .await?;

    let admin = principal("admin", &["vacations:all:write"]);
    let updated = VacationService::new(db, &admin)
        .update(
            existing.id,
            UpdateVacationParams {
                name: "Ski Trip 2".to_string(),
                description: None,
                status: VacationStatus::Requested,
                from_date: date(2025, 1, 10),
                to_date: date(2025, 1, 17),
                organization_id: None,
            },
        )
        .await?;

    assert_eq!(updated.name, "Ski Trip 2");
    assert_eq!(updated.owner, "bob");

    let records = AuditRepository::new(db).find_by_entity_id(existing.id).await?;
    assert_eq!(records.len(), 1);

    let record = AuditRecord::from_entity(records[0].clone())?;
    assert_eq!(record.operation, AuditOperation::Update);
    assert_eq!(record.actor, "admin");
    assert_eq!(
        records[0].diff,
        Some(serde_json::json!({"name": {"from": "Ski Trip", "to": "Ski Trip 2"}}))
    );

    Ok(())
}

/// Tests updating a vacation owned by another subject with only the own write scope.
///
/// Expected: Err(NotFound) and the vacation is unchanged
#[tokio::test]
async fn update_hides_foreign_vacation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_vacation(db, "bob").await?;

    let alice = principal("alice", &["vacations:write"]);
    let result = VacationService::new(db, &alice)
        .update(
            existing.id,
            UpdateVacationParams {
                name: "Mine now".to_string(),
                description: None,
                status: VacationStatus::Accepted,
                from_date: existing.from_date,
                to_date: existing.to_date,
                organization_id: None,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let records = AuditRepository::new(db).find_by_entity_id(existing.id).await?;
    assert!(records.is_empty());

    Ok(())
}

/// Tests deleting an own vacation.
///
/// Expected: Ok, the vacation is gone and a DELETE audit record exists
#[tokio::test]
async fn delete_removes_and_records_audit() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_vacation(db, "alice").await?;

    let alice = principal("alice", &["vacations:read", "vacations:write"]);
    let service = VacationService::new(db, &alice);

    service.delete(existing.id).await?;

    assert!(matches!(
        service.get_by_id(existing.id).await,
        Err(AppError::NotFound(_))
    ));

    let records = AuditRepository::new(db).find_by_entity_id(existing.id).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].operation, "DELETE");
    assert!(records[0].diff.is_none());

    Ok(())
}

/// Tests requesting a page whose offset overflows `u64`.
///
/// Expected: Ok with an empty last page that still reports the total
#[tokio::test]
async fn huge_page_number_returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_vacation(db, "alice").await?;

    let alice = principal("alice", &["vacations:read"]);
    let page = VacationService::new(db, &alice)
        .get_paginated(PageRequest::new(u64::MAX, 10), None)
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.number, u64::MAX);
    assert!(page.is_last());

    Ok(())
}
