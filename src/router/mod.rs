mod accounts;
mod auth;
mod legal;
mod list_accounts;
mod payments;
mod physical;
mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn create() -> Router<AppState> {
    Router::new()
        .route("/auth/register/", post(auth::register))
        .route("/auth/token/", post(auth::token))
        .route("/users/", get(users::list))
        .route("/accounts/create/phy/", post(accounts::create_physical))
        .route("/accounts/create/leg/", post(accounts::create_legal))
        .route("/phisycal/list/", get(physical::list))
        .route(
            "/phisycal/{id}/",
            get(physical::retrieve)
                .put(physical::update)
                .delete(physical::destroy),
        )
        .route("/phisycal/create/", post(physical::create))
        .route("/legal/list/", get(legal::list))
        .route(
            "/legal/{id}/",
            get(legal::retrieve).put(legal::update).delete(legal::destroy),
        )
        .route("/legal/create/", post(legal::create))
        .route("/payments/create/", post(payments::create))
        .route("/payments/list/", get(payments::list))
        .route("/list-accounts/list/", get(list_accounts::list))
}
