use sqlx::SqliteConnection;

use crate::error::Result;

/// Role categories a user may hold, possibly both at once. Stored as rows
/// in `type_users` (seeded by migration) rather than a column constraint,
/// keeping the category list data-driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Physical,
    Legal,
}

impl RoleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleCategory::Physical => "physical",
            RoleCategory::Legal => "legal",
        }
    }
}

/// Get-or-create of the `type_users` row for a category. Idempotent.
pub async fn ensure_type_user(conn: &mut SqliteConnection, category: RoleCategory) -> Result<i64> {
    sqlx::query("INSERT OR IGNORE INTO type_users (name) VALUES ($1)")
        .bind(category.as_str())
        .execute(&mut *conn)
        .await?;

    let (id,): (i64,) = sqlx::query_as("SELECT id FROM type_users WHERE name = $1")
        .bind(category.as_str())
        .fetch_one(&mut *conn)
        .await?;

    Ok(id)
}

/// Get-or-create of the user's role record, returning the
/// `type_list_users` id every role-scoped write hangs off. Idempotent;
/// callers run it inside their own transaction so the role record and the
/// dependent write land together.
pub async fn ensure_role(
    conn: &mut SqliteConnection,
    user_id: i64,
    category: RoleCategory,
) -> Result<i64> {
    let type_user_id = ensure_type_user(&mut *conn, category).await?;

    sqlx::query("INSERT OR IGNORE INTO type_list_users (user_id, type_user_id) VALUES ($1, $2)")
        .bind(user_id)
        .bind(type_user_id)
        .execute(&mut *conn)
        .await?;

    let (id,): (i64,) =
        sqlx::query_as("SELECT id FROM type_list_users WHERE user_id = $1 AND type_user_id = $2")
            .bind(user_id)
            .bind(type_user_id)
            .fetch_one(&mut *conn)
            .await?;

    Ok(id)
}
