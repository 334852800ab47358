//! Delegated token authentication: registration and token issuance feed a
//! bearer-JWT gate; every protected handler receives the caller as an
//! explicit [`AuthUser`] parameter.

pub mod password;
mod token;

pub use token::{issue_token, verify_token, Claims};

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;

use crate::{AppState, Error};

/// Authenticated caller identity, decoded from the `Authorization` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub id: i64,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::Unauthorized)?;

        let token = value.strip_prefix("Bearer ").ok_or(Error::Unauthorized)?;
        let claims = verify_token(token, &state.config.jwt_secret)?;

        Ok(AuthUser { id: claims.sub })
    }
}
