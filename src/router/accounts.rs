use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::account::{self, Account, CreateAccount};
use crate::auth::AuthUser;
use crate::error::Result;
use crate::user::role::RoleCategory;
use crate::AppState;

pub async fn create_physical(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateAccount>,
) -> Result<(StatusCode, Json<Account>)> {
    let account =
        account::create_for_role(&state.db, auth.id, RoleCategory::Physical, payload).await?;

    Ok((StatusCode::CREATED, Json(account)))
}

pub async fn create_legal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateAccount>,
) -> Result<(StatusCode, Json<Account>)> {
    let account =
        account::create_for_role(&state.db, auth.id, RoleCategory::Legal, payload).await?;

    Ok((StatusCode::CREATED, Json(account)))
}
