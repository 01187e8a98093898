use super::*;

/// Tests replacing every mutable field of a vacation.
///
/// Expected: Ok with new values, unchanged owner and a bumped update timestamp
#[tokio::test]
async fn updates_vacation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::vacation::VacationFactory::new(db, "bob")
        .name("Ski Trip")
        .build()
        .await?;

    let repo = VacationRepository::new(db);
    let updated = repo
        .update(
            existing.clone(),
            UpdateVacationParams {
                name: "Ski Trip 2".to_string(),
                description: Some("Longer".to_string()),
                status: VacationStatus::Withdrawn,
                from_date: date(2025, 3, 1),
                to_date: date(2025, 3, 10),
                organization_id: None,
            },
        )
        .await?;

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.owner, "bob");
    assert_eq!(updated.name, "Ski Trip 2");
    assert_eq!(updated.status, "WITHDRAWN");
    assert_eq!(updated.to_date, date(2025, 3, 10));
    assert!(updated.updated_at >= existing.updated_at);

    Ok(())
}
