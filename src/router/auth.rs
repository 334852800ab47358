use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::issue_token;
use crate::error::Result;
use crate::user::{self, RegisterUser, User};
use crate::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUser>,
) -> Result<(StatusCode, Json<User>)> {
    let user = user::register(&state.db, payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Deserialize)]
pub struct TokenRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub access: String,
}

pub async fn token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    let user = user::authenticate(&state.db, &payload.username, &payload.password).await?;
    let access = issue_token(
        user.id,
        &user.username,
        &state.config.jwt_secret,
        state.config.token_ttl_secs,
    )?;

    Ok(Json(TokenResponse { access }))
}
