//! Read side of `/users/`: every user with their role records, the
//! accounts linked to each role, and both profile lists nested in.

use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::Result;
use crate::profile::legal::LegalProfile;
use crate::profile::physical::PhysicalProfile;
use crate::user::User;

#[derive(Debug, Serialize)]
pub struct UserDetails {
    pub id: i64,
    pub username: String,
    pub is_debtor: bool,
    pub roles: Vec<RoleDetails>,
    pub physical_profiles: Vec<PhysicalProfile>,
    pub legal_profiles: Vec<LegalProfile>,
}

#[derive(Debug, Serialize)]
pub struct RoleDetails {
    pub id: i64,
    pub category: String,
    pub accounts: Vec<LinkedAccount>,
}

/// An ownership edge joined with its account, as shown under a role.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LinkedAccount {
    pub id: i64,
    pub account_id: i64,
    pub account_number: String,
    pub balance: i64,
}

#[derive(sqlx::FromRow)]
struct RoleRow {
    id: i64,
    category: String,
}

pub async fn list_users(db: &SqlitePool) -> Result<Vec<UserDetails>> {
    let users: Vec<User> = sqlx::query_as("SELECT * FROM users ORDER BY id")
        .fetch_all(db)
        .await?;

    let mut details = Vec::with_capacity(users.len());
    for user in users {
        details.push(user_details(db, user).await?);
    }

    Ok(details)
}

async fn user_details(db: &SqlitePool, user: User) -> Result<UserDetails> {
    let role_rows: Vec<RoleRow> = sqlx::query_as(
        "SELECT tlu.id, tu.name AS category FROM type_list_users tlu \
         JOIN type_users tu ON tu.id = tlu.type_user_id \
         WHERE tlu.user_id = $1 ORDER BY tlu.id",
    )
    .bind(user.id)
    .fetch_all(db)
    .await?;

    let mut roles = Vec::with_capacity(role_rows.len());
    for role in role_rows {
        let accounts: Vec<LinkedAccount> = sqlx::query_as(
            "SELECT la.id, a.id AS account_id, a.account_number, a.balance \
             FROM list_accounts la \
             JOIN accounts a ON a.id = la.account_id \
             WHERE la.type_list_user_id = $1 ORDER BY la.id",
        )
        .bind(role.id)
        .fetch_all(db)
        .await?;

        roles.push(RoleDetails {
            id: role.id,
            category: role.category,
            accounts,
        });
    }

    let physical_profiles = crate::profile::physical::list_for_user(db, user.id).await?;
    let legal_profiles = crate::profile::legal::list_for_user(db, user.id).await?;

    Ok(UserDetails {
        id: user.id,
        username: user.username,
        is_debtor: user.is_debtor,
        roles,
        physical_profiles,
        legal_profiles,
    })
}
