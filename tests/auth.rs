mod common;

use anyhow::Result;
use teller::auth::{issue_token, verify_token};
use teller::user::{self, RegisterUser};
use teller::Error;

use common::{register_user, setup_pool, TEST_PASSWORD};

#[tokio::test]
async fn registration_attaches_the_physical_role() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    assert!(!user.is_debtor);

    let (roles,): (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM type_list_users tlu \
         JOIN type_users tu ON tu.id = tlu.type_user_id \
         WHERE tlu.user_id = $1 AND tu.name = 'physical'",
    )
    .bind(user.id)
    .fetch_one(&db)
    .await?;
    assert_eq!(roles, 1);

    Ok(())
}

#[tokio::test]
async fn duplicate_username_is_a_write_failure() -> Result<()> {
    let db = setup_pool().await?;
    register_user(&db, "alice").await?;

    let err = register_user(&db, "alice").await.unwrap_err();
    let err = err.downcast::<Error>()?;
    assert!(matches!(err, Error::Sqlx(_)));

    Ok(())
}

#[tokio::test]
async fn weak_password_is_rejected_before_any_write() -> Result<()> {
    let db = setup_pool().await?;

    let err = user::register(
        &db,
        RegisterUser {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password: "short".to_owned(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&db)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn authenticate_checks_the_password() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    let authed = user::authenticate(&db, "alice", TEST_PASSWORD).await?;
    assert_eq!(authed.id, user.id);

    let err = user::authenticate(&db, "alice", "wrong").await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized));

    let err = user::authenticate(&db, "nobody", TEST_PASSWORD)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Unauthorized));

    Ok(())
}

#[tokio::test]
async fn issued_token_carries_the_user_identity() -> Result<()> {
    let db = setup_pool().await?;
    let user = register_user(&db, "alice").await?;

    let token = issue_token(user.id, &user.username, "test-secret", 3600)?;
    let claims = verify_token(&token, "test-secret")?;

    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.username, "alice");

    Ok(())
}
