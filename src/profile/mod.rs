//! Physical and legal profile CRUD. Every query is scoped to the calling
//! user; creating a profile also ensures the matching role record exists.

pub mod legal;
pub mod physical;

use validator::ValidationError;

/// Contact numbers: leading `+` followed by 5 to 15 digits.
pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    let digits = match value.strip_prefix('+') {
        Some(rest) => rest,
        None => return Err(ValidationError::new("phone")),
    };

    if !(5..=15).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("phone"));
    }

    Ok(())
}
