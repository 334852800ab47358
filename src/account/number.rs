use uuid::Uuid;

/// Account-type names whose numbers take the checking prefix. Exact match,
/// no normalization.
pub const CHECKING_TYPE_NAMES: [&str; 2] = ["Дебетовый", "Кредитный"];

pub const CHECKING_PREFIX: &str = "101-";
pub const SAVINGS_PREFIX: &str = "102-";

pub fn prefix_for(type_name: &str) -> &'static str {
    if CHECKING_TYPE_NAMES.contains(&type_name) {
        CHECKING_PREFIX
    } else {
        SAVINGS_PREFIX
    }
}

/// Generates a fresh account number: category prefix plus a random UUID v4.
///
/// There is no collision retry; uniqueness rides on UUID randomness, and
/// the unique index on `accounts.account_number` surfaces the astronomical
/// exception as a write failure. Numbers are assigned exactly once at
/// insert and no statement in this crate ever updates the column.
pub fn generate(type_name: &str) -> String {
    format!("{}{}", prefix_for(type_name), Uuid::new_v4())
}
