//! Banking-account CRUD backend.
//!
//! Users register with a `physical` role attached, may additionally hold a
//! `legal` role, and open accounts scoped to either role. Payments are
//! tracked per account-ownership edge and a derived debtor flag is
//! recomputed from the unpaid set on demand.

#![forbid(unsafe_code)]

pub mod account;
pub mod auth;
pub mod config;
pub mod error;
pub mod payment;
pub mod profile;
pub mod router;
pub mod user;

use std::sync::Arc;

use sqlx::SqlitePool;

pub use config::Config;
pub use error::{Error, Result};

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}
