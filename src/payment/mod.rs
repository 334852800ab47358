use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};

/// A transaction against an ownership edge. The transaction code is a
/// UUID assigned at creation and never updated; payments start unpaid and
/// are settled by an external administrative process.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,
    pub transaction_code: String,
    pub list_account_id: i64,
    pub amount: i64,
    pub is_paid_for: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePayment {
    #[validate(range(min = 1))]
    pub list_account_id: i64,
    /// Minor units, strictly positive.
    #[validate(range(min = 1))]
    pub amount: i64,
}

/// Creates an unpaid payment against one of the caller's own ownership
/// edges. The edge must belong to the caller through either role; anything
/// else reads as not found, the same as a nonexistent id.
pub async fn create(db: &SqlitePool, user_id: i64, payload: CreatePayment) -> Result<Payment> {
    payload.validate()?;

    let (owned,): (bool,) = sqlx::query_as(
        "SELECT EXISTS( \
            SELECT 1 FROM list_accounts la \
            JOIN type_list_users tlu ON tlu.id = la.type_list_user_id \
            WHERE la.id = $1 AND tlu.user_id = $2)",
    )
    .bind(payload.list_account_id)
    .bind(user_id)
    .fetch_one(db)
    .await?;

    if !owned {
        return Err(Error::NotFound("list account"));
    }

    let payment: Payment = sqlx::query_as(
        "INSERT INTO payments (transaction_code, list_account_id, amount, is_paid_for, created_at) \
         VALUES ($1, $2, $3, FALSE, $4) RETURNING *",
    )
    .bind(Uuid::new_v4().to_string())
    .bind(payload.list_account_id)
    .bind(payload.amount)
    .bind(Utc::now())
    .fetch_one(db)
    .await?;

    tracing::info!(
        payment_id = payment.id,
        transaction_code = %payment.transaction_code,
        "payment created"
    );

    Ok(payment)
}

pub async fn list_all(db: &SqlitePool) -> Result<Vec<Payment>> {
    let payments = sqlx::query_as("SELECT * FROM payments ORDER BY id")
        .fetch_all(db)
        .await?;

    Ok(payments)
}
