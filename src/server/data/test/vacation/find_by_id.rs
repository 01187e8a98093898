use super::*;

/// Tests the unscoped lookup finds any owner's vacation.
///
/// Expected: Ok(Some) for an existing id, Ok(None) for an unknown id
#[tokio::test]
async fn finds_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacation = factory::create_vacation(db, "bob").await?;

    let repo = VacationRepository::new(db);

    assert_eq!(
        repo.find_by_id(vacation.id).await?.map(|v| v.id),
        Some(vacation.id)
    );
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await?, None);

    Ok(())
}

/// Tests the owner-scoped lookup hides other owners' vacations.
///
/// Expected: Ok(Some) for the owner, Ok(None) for anyone else
#[tokio::test]
async fn finds_by_id_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacation = factory::create_vacation(db, "bob").await?;

    let repo = VacationRepository::new(db);

    assert!(repo
        .find_by_id_and_owner(vacation.id, "bob")
        .await?
        .is_some());
    assert!(repo
        .find_by_id_and_owner(vacation.id, "alice")
        .await?
        .is_none());

    Ok(())
}
