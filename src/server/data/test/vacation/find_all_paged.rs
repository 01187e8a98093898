use super::*;

/// Tests paging over all vacations.
///
/// Expected: page sizes follow the request and the total covers every owner
#[tokio::test]
async fn pages_all_vacations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_vacation(db, "alice").await?;
    }
    for _ in 0..2 {
        factory::create_vacation(db, "bob").await?;
    }

    let repo = VacationRepository::new(db);

    let first = repo.find_all_paged(PageRequest::new(0, 2)).await?;
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_elements, 5);
    assert_eq!(first.total_pages(), 3);
    assert!(first.is_first());

    let last = repo.find_all_paged(PageRequest::new(2, 2)).await?;
    assert_eq!(last.items.len(), 1);
    assert!(last.is_last());

    Ok(())
}

/// Tests paging over one owner's vacations.
///
/// Expected: only vacations owned by the given owner are returned
#[tokio::test]
async fn pages_vacations_of_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_vacation(db, "alice").await?;
    }
    factory::create_vacation(db, "bob").await?;

    let repo = VacationRepository::new(db);
    let page = repo
        .find_all_by_owner_paged(PageRequest::default(), "alice")
        .await?;

    assert_eq!(page.total_elements, 3);
    assert!(page.items.iter().all(|v| v.owner == "alice"));

    Ok(())
}

/// Tests ordering by start date.
///
/// Expected: the vacation starting latest comes first
#[tokio::test]
async fn orders_by_start_date_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::vacation::VacationFactory::new(db, "alice")
        .name("Early")
        .dates(date(2025, 1, 1), date(2025, 1, 2))
        .build()
        .await?;
    factory::vacation::VacationFactory::new(db, "alice")
        .name("Late")
        .dates(date(2025, 6, 1), date(2025, 6, 2))
        .build()
        .await?;

    let repo = VacationRepository::new(db);
    let page = repo.find_all_paged(PageRequest::default()).await?;

    let names: Vec<_> = page.items.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["Late", "Early"]);

    Ok(())
}
