use crate::server::{
    data::organization::OrganizationRepository,
    model::{
        organization::{CreateOrganizationParams, UpdateOrganizationParams},
        page::PageRequest,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

/// Tests creating an organization.
///
/// Expected: Ok with the given fields
#[tokio::test]
async fn creates_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrganizationRepository::new(db);
    let organization = repo
        .create(CreateOrganizationParams {
            owner: "alice".to_string(),
            name: "Acme".to_string(),
            description: None,
            enabled: true,
        })
        .await?;

    assert_eq!(organization.name, "Acme");
    assert_eq!(organization.owner, "alice");
    assert!(organization.enabled);
    assert!(repo.exists(organization.id).await?);
    assert!(!repo.exists(Uuid::new_v4()).await?);

    Ok(())
}

/// Tests the unique name constraint.
///
/// Expected: Err(DbErr) for a second organization with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::organization::OrganizationFactory::new(db, "alice")
        .name("Acme")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);
    let result = repo
        .create(CreateOrganizationParams {
            owner: "bob".to_string(),
            name: "Acme".to_string(),
            description: None,
            enabled: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests looking up an organization by name.
///
/// Expected: Ok(Some) for the existing name, Ok(None) otherwise
#[tokio::test]
async fn finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let organization = factory::organization::OrganizationFactory::new(db, "alice")
        .name("Acme")
        .build()
        .await?;

    let repo = OrganizationRepository::new(db);

    assert_eq!(
        repo.find_by_name("Acme").await?.map(|o| o.id),
        Some(organization.id)
    );
    assert!(repo.find_by_name("Globex").await?.is_none());

    Ok(())
}

/// Tests updating an organization.
///
/// Expected: Ok with the new name and disabled flag
#[tokio::test]
async fn updates_organization() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_organization(db, "alice").await?;

    let repo = OrganizationRepository::new(db);
    let updated = repo
        .update(
            existing,
            UpdateOrganizationParams {
                name: "Renamed".to_string(),
                description: Some("New".to_string()),
                enabled: false,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert!(!updated.enabled);

    Ok(())
}

/// Tests owner-scoped paging and deletion.
///
/// Expected: only the owner's organizations are listed and deletable
#[tokio::test]
async fn scopes_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_vacation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_organization(db, "alice").await?;
    let foreign = factory::create_organization(db, "bob").await?;

    let repo = OrganizationRepository::new(db);

    let page = repo
        .find_all_by_owner_paged(PageRequest::default(), "alice")
        .await?;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.items[0].id, own.id);

    let all = repo.find_all_paged(PageRequest::default()).await?;
    assert_eq!(all.total_elements, 2);

    assert!(repo
        .find_by_id_and_owner(foreign.id, "alice")
        .await?
        .is_none());
    assert_eq!(repo.delete_by_id_and_owner(foreign.id, "alice").await?, 0);
    assert_eq!(repo.delete_by_id(foreign.id).await?, 1);

    Ok(())
}
