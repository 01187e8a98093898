use test_utils::{builder::TestBuilder, factory};

use super::principal;
use crate::server::{
    error::AppError, model::user::CreateUserParams, service::user::UserService,
};

fn create_params(subject: Option<&str>, username: &str) -> CreateUserParams {
    CreateUserParams {
        subject: subject.map(str::to_string),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        first_name: None,
        last_name: None,
    }
}

/// Tests that a requested subject is ignored without the all write scope.
///
/// Expected: Ok with the caller as owner
#[tokio::test]
async fn create_ignores_subject_without_all_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = principal("alice", &["users:write"]);
    let user = UserService::new(db, &alice)
        .create(create_params(Some("bob"), "alice"))
        .await?;

    assert_eq!(user.owner, "alice");
    assert!(user.enabled);

    Ok(())
}

/// Tests creating a profile for another subject with the all write scope.
///
/// Expected: Ok with the requested subject as owner
#[tokio::test]
async fn create_honours_subject_with_all_scope() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = principal("admin", &["users:all:write"]);
    let user = UserService::new(db, &admin)
        .create(create_params(Some("bob"), "bob"))
        .await?;

    assert_eq!(user.owner, "bob");

    Ok(())
}

/// Tests creating a profile with a taken username.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn create_rejects_duplicate_username() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db, "bob")
        .username("taken")
        .build()
        .await?;

    let alice = principal("alice", &["users:write"]);
    let result = UserService::new(db, &alice)
        .create(create_params(None, "taken"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reading the caller's own profile.
///
/// Expected: NotFound before a profile exists, the profile afterwards
#[tokio::test]
async fn get_current_returns_own_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db, "bob").await?;

    let alice = principal("alice", &["users:read"]);
    let service = UserService::new(db, &alice);

    assert!(matches!(
        service.get_current().await,
        Err(AppError::NotFound(_))
    ));

    let own = factory::create_user(db, "alice").await?;
    assert_eq!(service.get_current().await?.id, own.id);

    Ok(())
}
