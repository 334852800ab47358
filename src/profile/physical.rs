use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};
use crate::user::role::{self, RoleCategory};

pub const GENDERS: [&str; 2] = ["male", "female"];

/// Personal profile of a physical-role user. `is_staff` and `user_id` are
/// internal and never serialized out.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PhysicalProfile {
    pub id: i64,
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub birth_day: NaiveDate,
    pub address: String,
    pub phone: String,
    pub gender: String,
    #[serde(skip_serializing)]
    pub is_staff: bool,
    #[serde(skip_serializing)]
    pub user_id: i64,
}

#[derive(Debug, Deserialize, Validate)]
pub struct PhysicalProfileInput {
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100))]
    pub patronymic: String,
    pub birth_day: NaiveDate,
    #[validate(length(min = 1, max = 100))]
    pub address: String,
    #[validate(custom = "super::validate_phone")]
    pub phone: String,
    #[validate(custom = "validate_gender")]
    pub gender: String,
}

fn validate_gender(value: &str) -> std::result::Result<(), ValidationError> {
    if GENDERS.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new("gender"))
    }
}

/// Creates a profile for the caller, ensuring the `physical` role record
/// in the same transaction (the profile and the role land together).
pub async fn create(
    db: &SqlitePool,
    user_id: i64,
    input: PhysicalProfileInput,
) -> Result<PhysicalProfile> {
    input.validate()?;

    let mut tx = db.begin().await?;

    role::ensure_role(&mut tx, user_id, RoleCategory::Physical).await?;

    let profile: PhysicalProfile = sqlx::query_as(
        "INSERT INTO physical_profiles \
         (last_name, first_name, patronymic, birth_day, address, phone, gender, is_staff, user_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, FALSE, $8) RETURNING *",
    )
    .bind(&input.last_name)
    .bind(&input.first_name)
    .bind(&input.patronymic)
    .bind(input.birth_day)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.gender)
    .bind(user_id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(profile)
}

pub async fn list_for_user(db: &SqlitePool, user_id: i64) -> Result<Vec<PhysicalProfile>> {
    let profiles =
        sqlx::query_as("SELECT * FROM physical_profiles WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(db)
            .await?;

    Ok(profiles)
}

/// Caller-scoped fetch: someone else's profile id is indistinguishable
/// from a missing one.
pub async fn get(db: &SqlitePool, user_id: i64, id: i64) -> Result<PhysicalProfile> {
    let profile = sqlx::query_as("SELECT * FROM physical_profiles WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    profile.ok_or(Error::NotFound("physical profile"))
}

pub async fn update(
    db: &SqlitePool,
    user_id: i64,
    id: i64,
    input: PhysicalProfileInput,
) -> Result<PhysicalProfile> {
    input.validate()?;

    let profile: Option<PhysicalProfile> = sqlx::query_as(
        "UPDATE physical_profiles SET \
         last_name = $1, first_name = $2, patronymic = $3, birth_day = $4, \
         address = $5, phone = $6, gender = $7 \
         WHERE id = $8 AND user_id = $9 RETURNING *",
    )
    .bind(&input.last_name)
    .bind(&input.first_name)
    .bind(&input.patronymic)
    .bind(input.birth_day)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.gender)
    .bind(id)
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    profile.ok_or(Error::NotFound("physical profile"))
}

pub async fn delete(db: &SqlitePool, user_id: i64, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM physical_profiles WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound("physical profile"));
    }

    Ok(())
}
