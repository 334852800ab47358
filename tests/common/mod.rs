#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use teller::user::{self, RegisterUser, User};
use teller::{AppState, Config};

/// Fresh migrated in-memory database. One connection only: every pool
/// handle must see the same `:memory:` instance.
pub async fn setup_pool() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    Ok(pool)
}

pub fn test_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_owned(),
        bind_addr: "127.0.0.1:0".to_owned(),
        jwt_secret: "test-secret".to_owned(),
        token_ttl_secs: 3600,
    }
}

pub async fn setup_state() -> Result<AppState> {
    Ok(AppState {
        db: setup_pool().await?,
        config: Arc::new(test_config()),
    })
}

pub const TEST_PASSWORD: &str = "correct horse battery";

pub async fn register_user(db: &SqlitePool, username: &str) -> Result<User> {
    let user = user::register(
        db,
        RegisterUser {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            password: TEST_PASSWORD.to_owned(),
        },
    )
    .await?;

    Ok(user)
}

pub async fn account_type_id(db: &SqlitePool, name: &str) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM account_types WHERE name = $1")
        .bind(name)
        .fetch_one(db)
        .await?;

    Ok(id)
}

/// Stands in for the external administrative process that settles
/// payments; no in-service endpoint does this.
pub async fn mark_all_paid(db: &SqlitePool) -> Result<()> {
    sqlx::query("UPDATE payments SET is_paid_for = TRUE")
        .execute(db)
        .await?;

    Ok(())
}
