use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("authentication required")]
    Unauthorized,

    #[error("validation failed")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Precondition(String),

    #[error("jwt: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("password hash: {0}")]
    PasswordHash(String),

    #[error("sqlx: {0}")]
    Sqlx(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Unauthorized | Error::Jwt(_) => StatusCode::UNAUTHORIZED,
            Error::Validation(_) | Error::Precondition(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) | Error::Sqlx(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Error::Sqlx(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                StatusCode::CONFLICT
            }
            Error::PasswordHash(_) | Error::Sqlx(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every failure ends the current request with a JSON body; validation
/// failures carry field-level details, nothing is retried.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        let body = match &self {
            Error::Validation(errors) => json!({
                "error": self.to_string(),
                "fields": errors,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
