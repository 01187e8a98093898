use crate::server::{
    data::user::UserRepository,
    model::{
        page::PageRequest,
        user::{CreateUserParams, UpdateUserParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a user profile.
///
/// Expected: Ok with the given fields, enabled by default
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "alice".to_string(),
            CreateUserParams {
                subject: None,
                username: "alice".to_string(),
                email: "alice@example.com".to_string(),
                first_name: Some("Alice".to_string()),
                last_name: None,
            },
        )
        .await?;

    assert_eq!(user.owner, "alice");
    assert_eq!(user.username, "alice");
    assert!(user.enabled);

    Ok(())
}

/// Tests lookups by username and owner.
///
/// Expected: Ok(Some) for matching values, Ok(None) otherwise
#[tokio::test]
async fn finds_by_username_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db, "alice")
        .username("alice")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    assert_eq!(
        repo.find_by_username("alice").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_by_username("bob").await?.is_none());
    assert_eq!(
        repo.find_first_by_owner("alice").await?.map(|u| u.id),
        Some(user.id)
    );
    assert!(repo.find_first_by_owner("bob").await?.is_none());

    Ok(())
}

/// Tests updating a profile.
///
/// Expected: Ok with new values and unchanged owner
#[tokio::test]
async fn updates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db, "alice").await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            existing,
            UpdateUserParams {
                username: "alice2".to_string(),
                email: "new@example.com".to_string(),
                first_name: None,
                last_name: Some("Liddell".to_string()),
                enabled: false,
            },
        )
        .await?;

    assert_eq!(updated.owner, "alice");
    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.email, "new@example.com");
    assert!(!updated.enabled);

    Ok(())
}

/// Tests owner-scoped paging and deletion.
///
/// Expected: only the owner's profiles are listed and deletable
#[tokio::test]
async fn scopes_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "alice").await?;
    let foreign = factory::create_user(db, "bob").await?;

    let repo = UserRepository::new(db);

    let page = repo
        .find_all_by_owner_paged(PageRequest::default(), "alice")
        .await?;
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.items[0].owner, "alice");

    assert!(repo
        .find_by_id_and_owner(foreign.id, "alice")
        .await?
        .is_none());
    assert_eq!(repo.delete_by_id_and_owner(foreign.id, "alice").await?, 0);
    assert_eq!(repo.delete_by_id(foreign.id).await?, 1);

    Ok(())
}
