pub mod number;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::Validate;

use crate::error::{Error, Result};
use crate::user::role::{self, RoleCategory};

/// Account category, optionally nested under a parent category.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AccountType {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

/// A financial account. Balance is in minor units (fixed point, two
/// decimals). `created_at` is internal and stays out of responses.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub account_number: String,
    pub balance: i64,
    #[serde(skip_serializing)]
    pub created_at: DateTime<Utc>,
    pub account_type_id: Option<i64>,
}

/// The ownership edge between an account and a user's role record.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ListAccount {
    pub id: i64,
    pub account_id: i64,
    pub type_list_user_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccount {
    #[validate(range(min = 1))]
    pub account_type_id: i64,
}

/// Creates an account and links it to the caller's role record in one
/// transaction: an account row never exists without its ownership edge
/// when created through this path. The role record itself is created on
/// first use.
///
/// Precondition: the account type must exist; its name drives the number
/// prefix and a missing type fails before any write.
pub async fn create_for_role(
    db: &SqlitePool,
    user_id: i64,
    category: RoleCategory,
    payload: CreateAccount,
) -> Result<Account> {
    payload.validate()?;

    let mut tx = db.begin().await?;

    let account_type: Option<AccountType> =
        sqlx::query_as("SELECT * FROM account_types WHERE id = $1")
            .bind(payload.account_type_id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some(account_type) = account_type else {
        return Err(Error::Precondition(format!(
            "account type {} does not exist",
            payload.account_type_id
        )));
    };

    let account: Account = sqlx::query_as(
        "INSERT INTO accounts (account_number, balance, created_at, account_type_id) \
         VALUES ($1, 0, $2, $3) RETURNING *",
    )
    .bind(number::generate(&account_type.name))
    .bind(Utc::now())
    .bind(account_type.id)
    .fetch_one(&mut *tx)
    .await?;

    let type_list_user_id = role::ensure_role(&mut tx, user_id, category).await?;

    let list_account: ListAccount = sqlx::query_as(
        "INSERT INTO list_accounts (account_id, type_list_user_id) VALUES ($1, $2) RETURNING *",
    )
    .bind(account.id)
    .bind(type_list_user_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(
        account_id = account.id,
        account_number = %account.account_number,
        list_account_id = list_account.id,
        category = category.as_str(),
        "account created"
    );

    Ok(account)
}

/// The caller's ownership edges across both role categories.
pub async fn list_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<ListAccount>> {
    let edges = sqlx::query_as(
        "SELECT la.id, la.account_id, la.type_list_user_id FROM list_accounts la \
         JOIN type_list_users tlu ON tlu.id = la.type_list_user_id \
         WHERE tlu.user_id = $1 ORDER BY la.id",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    Ok(edges)
}
