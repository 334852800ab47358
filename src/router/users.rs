use axum::extract::State;
use axum::Json;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::user::query::{self, UserDetails};
use crate::AppState;

pub async fn list(_auth: AuthUser, State(state): State<AppState>) -> Result<Json<Vec<UserDetails>>> {
    let users = query::list_users(&state.db).await?;

    Ok(Json(users))
}
