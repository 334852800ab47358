pub mod debtor;
pub mod query;
pub mod role;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::Validate;

use crate::auth::password;
use crate::error::{Error, Result};
use role::RoleCategory;

/// A bank client. `is_debtor` is derived, not authoritative; see
/// [`debtor::refresh_debtor_status`].
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_debtor: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Registers a user. The `physical` role record is attached in the same
/// transaction, so a freshly registered user can open accounts right away.
pub async fn register(db: &SqlitePool, payload: RegisterUser) -> Result<User> {
    payload.validate()?;

    let password_hash = password::hash(&payload.password)?;

    let mut tx = db.begin().await?;

    let user: User = sqlx::query_as(
        "INSERT INTO users (username, email, password_hash, is_debtor, created_at) \
         VALUES ($1, $2, $3, FALSE, $4) RETURNING *",
    )
    .bind(&payload.username)
    .bind(&payload.email)
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(&mut *tx)
    .await?;

    role::ensure_role(&mut tx, user.id, RoleCategory::Physical).await?;

    tx.commit().await?;

    Ok(user)
}

pub async fn by_username(db: &SqlitePool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(db)
        .await?;

    Ok(user)
}

/// Credential check for token issuance. Unknown username and wrong
/// password collapse into the same rejection.
pub async fn authenticate(db: &SqlitePool, username: &str, password_input: &str) -> Result<User> {
    let user = by_username(db, username).await?.ok_or(Error::Unauthorized)?;

    if !password::verify(password_input, &user.password_hash)? {
        return Err(Error::Unauthorized);
    }

    Ok(user)
}
