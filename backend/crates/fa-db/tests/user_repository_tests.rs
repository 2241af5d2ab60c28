mod common;

use common::{create_test_pool, create_test_user};

use fa_core::Role;
use fa_db::{DbError, UserRepository};

use googletest::prelude::*;

#[tokio::test]
async fn given_new_user_when_created_then_can_be_found_by_email_and_id() {
    // Given: An empty database
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    let user = create_test_user("ada@example.com");

    // When: Creating the user
    repo.create(&user).await.unwrap();

    // Then: Both lookups return the stored user, hash included
    let by_email = repo.find_by_email("ada@example.com").await.unwrap();
    assert_that!(by_email, some(anything()));
    let found = by_email.unwrap();
    assert_that!(found.id, eq(user.id));
    assert_that!(found.role, eq(Role::Teacher));
    assert_that!(found.password_hash, eq(&user.password_hash));

    let by_id = repo.find_by_id(user.id).await.unwrap();
    assert_that!(by_id.map(|u| u.email), some(eq("ada@example.com")));
}

#[tokio::test]
async fn given_mixed_case_lookup_when_finding_by_email_then_matches_normalized_address() {
    // Given: A user registered with a mixed-case address
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&create_test_user("Ada@Example.COM")).await.unwrap();

    // When: Looking up with different casing and whitespace
    let found = repo.find_by_email("  ADA@example.com ").await.unwrap();

    // Then: The account is found
    assert_that!(found, some(anything()));
    assert!(repo.email_exists("ada@EXAMPLE.com").await.unwrap());
}

#[tokio::test]
async fn given_existing_email_when_creating_again_then_returns_conflict() {
    // Given: A registered email
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);
    repo.create(&create_test_user("ada@example.com")).await.unwrap();

    // When: Another account uses the same email
    let result = repo.create(&create_test_user("ada@example.com")).await;

    // Then: The unique constraint surfaces as a conflict
    assert!(matches!(result, Err(DbError::Conflict { .. })));
}

#[tokio::test]
async fn given_empty_database_when_finding_unknown_email_then_returns_none() {
    let pool = create_test_pool().await;
    let repo = UserRepository::new(pool);

    let found = repo.find_by_email("nobody@example.com").await.unwrap();

    assert_that!(found, none());
    assert!(!repo.email_exists("nobody@example.com").await.unwrap());
}
