use crate::{
    model::friendship::FriendshipStatus,
    server::{
        data::friendship::FriendshipRepository,
        model::{friendship::CreateFriendshipParams, page::PageRequest},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a friendship.
///
/// Expected: Ok with the given owner, friend and status
#[tokio::test]
async fn creates_friendship() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FriendshipRepository::new(db);
    let friendship = repo
        .create(CreateFriendshipParams {
            owner: "alice".to_string(),
            friend: "bob".to_string(),
            status: FriendshipStatus::Requested,
        })
        .await?;

    assert_eq!(friendship.owner, "alice");
    assert_eq!(friendship.friend, "bob");
    assert_eq!(friendship.status, "REQUESTED");

    Ok(())
}

/// Tests finding the relation between two subjects.
///
/// Expected: Ok(Some) in the stored direction only
#[tokio::test]
async fn finds_by_owner_and_friend() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_friendship(db, "alice", "bob").await?;

    let repo = FriendshipRepository::new(db);

    assert!(repo
        .find_by_owner_and_friend("alice", "bob")
        .await?
        .is_some());
    assert!(repo
        .find_by_owner_and_friend("bob", "alice")
        .await?
        .is_none());

    Ok(())
}

/// Tests updating the status of a friendship.
///
/// Expected: Ok with the new status
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_friendship(db, "alice", "bob").await?;

    let repo = FriendshipRepository::new(db);
    let updated = repo
        .update_status(existing, FriendshipStatus::Blocked)
        .await?;

    assert_eq!(updated.status, "BLOCKED");

    Ok(())
}

/// Tests owner-scoped paging and deletion.
///
/// Expected: only the owner's friendships are listed and deletable
#[tokio::test]
async fn scopes_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_friendship(db, "alice", "bob").await?;
    factory::create_friendship(db, "alice", "carol").await?;
    let foreign = factory::create_friendship(db, "bob", "carol").await?;

    let repo = FriendshipRepository::new(db);

    let page = repo
        .find_all_by_owner_paged(PageRequest::default(), "alice")
        .await?;
    assert_eq!(page.total_elements, 2);

    let all = repo.find_all_paged(PageRequest::default()).await?;
    assert_eq!(all.total_elements, 3);

    assert!(repo
        .find_by_id_and_owner(foreign.id, "alice")
        .await?
        .is_none());
    assert!(repo.find_by_id(foreign.id).await?.is_some());
    assert_eq!(repo.delete_by_id_and_owner(foreign.id, "alice").await?, 0);
    assert_eq!(repo.delete_by_id_and_owner(foreign.id, "bob").await?, 1);

    Ok(())
}
