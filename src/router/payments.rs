use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::auth::AuthUser;
use crate::error::Result;
use crate::payment::{self, CreatePayment, Payment};
use crate::user::debtor;
use crate::AppState;

/// Payment endpoints refresh the caller's debtor flag before doing their
/// work, so the flag tracks the unpaid set without a background job.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(payload): Json<CreatePayment>,
) -> Result<(StatusCode, Json<Payment>)> {
    debtor::refresh_debtor_status(&state.db, auth.id).await?;

    let payment = payment::create(&state.db, auth.id, payload).await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

pub async fn list(auth: AuthUser, State(state): State<AppState>) -> Result<Json<Vec<Payment>>> {
    debtor::refresh_debtor_status(&state.db, auth.id).await?;

    let payments = payment::list_all(&state.db).await?;

    Ok(Json(payments))
}
