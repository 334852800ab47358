use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};
use crate::user::role::{self, RoleCategory};

pub const OWNERSHIP_FORMS: [&str; 4] = ["ООО", "ЗАО", "ОАО", "ИП"];

/// Organization profile of a legal-role user.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct LegalProfile {
    pub id: i64,
    pub org_name: String,
    pub address: String,
    pub boss_full_name: String,
    pub accountant_full_name: String,
    pub phone: String,
    pub ownership_form: String,
    #[serde(skip_serializing)]
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LegalProfileInput {
    #[validate(length(min = 1, max = 100))]
    pub org_name: String,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(length(min = 1, max = 100))]
    pub boss_full_name: String,
    #[validate(length(min = 1, max = 100))]
    pub accountant_full_name: String,
    #[validate(custom = "super::validate_phone")]
    pub phone: String,
    #[validate(custom = "validate_ownership_form")]
    pub ownership_form: String,
}

fn validate_ownership_form(value: &str) -> std::result::Result<(), ValidationError> {
    if OWNERSHIP_FORMS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("ownership_form"))
    }
}

/// Creates a profile for the caller, ensuring the `legal` role record in
/// the same transaction.
pub async fn create(db: &SqlitePool, user_id: i64, input: LegalProfileInput) -> Result<LegalProfile> {
    input.validate()?;

    let mut tx = db.begin().await?;

    role::ensure_role(&mut tx, user_id, RoleCategory::Legal).await?;

    let profile: LegalProfile = sqlx::query_as(
        "INSERT INTO legal_profiles \
         (org_name, address, boss_full_name, accountant_full_name, phone, ownership_form, user_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
    )
    .bind(&input.org_name)
    .bind(&input.address)
    .bind(&input.boss_full_name)
    .bind(&input.accountant_full_name)
    .bind(&input.phone)
    .bind(&input.ownership_form)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(profile)
}

pub async fn list_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<LegalProfile>> {
    let profiles = sqlx::query_as("SELECT * FROM legal_profiles WHERE user_id = $1 ORDER BY id")
        .bind(user_id)
        .fetch_all(db)
        .await?;

    Ok(profiles)
}

pub async fn get(db: &SqlitePool, user_id: i64, id: i64) -> Result<LegalProfile> {
    let profile = sqlx::query_as("SELECT * FROM legal_profiles WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    profile.ok_or(Error::NotFound("legal profile"))
}

pub async fn update(
    db: &SqlitePool,
    user_id: i64,
    id: i64,
    input: LegalProfileInput,
) -> Result<LegalProfile> {
    input.validate()?;

    let profile: Option<LegalProfile> = sqlx::query_as(
        "UPDATE legal_profiles SET \
         org_name = $1, address = $2, boss_full_name = $3, accountant_full_name = $4, \
         phone = $5, ownership_form = $6 \
         WHERE id = $7 AND user_id = $8 RETURNING *",
    )
    .bind(&input.org_name)
    .bind(&input.address)
    .bind(&input.boss_full_name)
    .bind(&input.accountant_full_name)
    .bind(&input.phone)
    .bind(&input.ownership_form)
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    profile.ok_or(Error::NotFound("legal profile"))
}

pub async fn delete(db: &SqlitePool, user_id: i64, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM legal_profiles WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound("legal profile"));
    }

    Ok(())
}
