use super::*;

/// Tests deleting a vacation by id.
///
/// Expected: one row affected, vacation no longer found
#[tokio::test]
async fn deletes_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacation = factory::create_vacation(db, "bob").await?;

    let repo = VacationRepository::new(db);

    assert_eq!(repo.delete_by_id(vacation.id).await?, 1);
    assert!(repo.find_by_id(vacation.id).await?.is_none());

    Ok(())
}

/// Tests the owner-scoped delete leaves other owners' vacations alone.
///
/// Expected: zero rows for a foreign owner, one row for the real owner
#[tokio::test]
async fn deletes_by_id_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let vacation = factory::create_vacation(db, "bob").await?;

    let repo = VacationRepository::new(db);

    assert_eq!(repo.delete_by_id_and_owner(vacation.id, "alice").await?, 0);
    assert!(repo.find_by_id(vacation.id).await?.is_some());
    assert_eq!(repo.delete_by_id_and_owner(vacation.id, "bob").await?, 1);
    assert!(repo.find_by_id(vacation.id).await?.is_none());

    Ok(())
}
