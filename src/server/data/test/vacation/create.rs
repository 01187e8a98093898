use super::*;

/// Tests creating a vacation with every field set.
///
/// Expected: Ok with a fresh id, the given fields and equal timestamps
#[tokio::test]
async fn creates_vacation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::create_organization(db, "alice").await?;

    let repo = VacationRepository::new(db);
    let vacation = repo
        .create(CreateVacationParams {
            owner: "alice".to_string(),
            name: "Ski Trip".to_string(),
            description: Some("Alps".to_string()),
            status: VacationStatus::Accepted,
            from_date: date(2025, 2, 1),
            to_date: date(2025, 2, 8),
            organization_id: Some(organization.id),
        })
        .await?;

    assert_ne!(vacation.id, Uuid::nil());
    assert_eq!(vacation.owner, "alice");
    assert_eq!(vacation.name, "Ski Trip");
    assert_eq!(vacation.description.as_deref(), Some("Alps"));
    assert_eq!(vacation.status, "ACCEPTED");
    assert_eq!(vacation.organization_id, Some(organization.id));
    assert_eq!(vacation.created_at, vacation.updated_at);

    Ok(())
}

/// Tests creating a vacation that references a missing organization.
///
/// Expected: Err(DbErr) from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VacationRepository::new(db);
    let result = repo
        .create(CreateVacationParams {
            owner: "alice".to_string(),
            name: "Ski Trip".to_string(),
            description: None,
            status: VacationStatus::Requested,
            from_date: date(2025, 2, 1),
            to_date: date(2025, 2, 8),
            organization_id: Some(Uuid::new_v4()),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
