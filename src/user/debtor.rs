use sqlx::SqlitePool;

use crate::error::Result;

/// Recomputes and persists the user's debtor flag: true iff at least one
/// unpaid payment is reachable through any of their role-linked accounts.
///
/// Full rescan on every call, across both role categories, and the update
/// runs unconditionally even when the flag is unchanged.
pub async fn refresh_debtor_status(db: &SqlitePool, user_id: i64) -> Result<bool> {
    let (has_unpaid,): (bool,) = sqlx::query_as(
        "SELECT EXISTS( \
            SELECT 1 FROM payments p \
            JOIN list_accounts la ON la.id = p.list_account_id \
            JOIN type_list_users tlu ON tlu.id = la.type_list_user_id \
            WHERE tlu.user_id = $1 AND p.is_paid_for = FALSE)",
    )
    .bind(user_id)
    .fetch_one(db)
    .await?;

    sqlx::query("UPDATE users SET is_debtor = $1 WHERE id = $2")
        .bind(has_unpaid)
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(has_unpaid)
}
