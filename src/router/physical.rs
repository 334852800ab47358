use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::profile::physical::{self, PhysicalProfile, PhysicalProfileInput};
use crate::AppState;

pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<PhysicalProfile>>> {
    let profiles = physical::list_for_user(&state.db, auth.id).await?;

    Ok(Json(profiles))
}

pub async fn retrieve(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PhysicalProfile>> {
    let profile = physical::get(&state.db, auth.id, id).await?;

    Ok(Json(profile))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<PhysicalProfileInput>,
) -> Result<(StatusCode, Json<PhysicalProfile>)> {
    let profile = physical::create(&state.db, auth.id, payload).await?;

    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<PhysicalProfileInput>,
) -> Result<Json<PhysicalProfile>> {
    let profile = physical::update(&state.db, auth.id, id, payload).await?;

    Ok(Json(profile))
}

pub async fn destroy(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    physical::delete(&state.db, auth.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
