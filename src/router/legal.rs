use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::profile::legal::{self, LegalProfile, LegalProfileInput};
use crate::AppState;

pub async fn list(auth: AuthUser, State(state): State<AppState>) -> Result<Json<Vec<LegalProfile>>> {
    let profiles = legal::list_for_user(&state.db, auth.id).await?;

    Ok(Json(profiles))
}

pub async fn retrieve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LegalProfile>> {
    let profile = legal::get(&state.db, auth.id, id).await?;

    Ok(Json(profile))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<LegalProfileInput>,
) -> Result<(StatusCode, Json<LegalProfile>)> {
    let profile = legal::create(&state.db, auth.id, payload).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<LegalProfileInput>,
) -> Result<Json<LegalProfile>> {
    let profile = legal::update(&state.db, auth.id, id, payload).await?;

    Ok(Json(profile))
}

pub async fn destroy(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    legal::delete(&state.db, auth.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
