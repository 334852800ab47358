use axum::extract::State;
use axum::Json;

use crate::account::{self, ListAccount};
use crate::auth::AuthUser;
use crate::error::Result;
use crate::AppState;

pub async fn list(auth: AuthUser, State(state): State<AppState>) -> Result<Json<Vec<ListAccount>>> {
    let edges = account::list_for_user(&state.db, auth.id).await?;

    Ok(Json(edges))
}
