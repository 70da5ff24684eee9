//! Member routes: generic CRUD plus enrollment and renewal.

use axum::routing::{get, post};
use axum::Router;
use gym_db::models::member::Member;

use crate::handlers::membership;
use crate::routes::collection;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// GET, POST          /                -> generic list / create
/// GET, PUT, DELETE   /{id}            -> generic get / replace / delete
/// POST               /register        -> register
/// POST               /{id}/renew      -> renew
/// GET                /{id}/status     -> status
/// ```
pub fn router() -> Router<AppState> {
    collection::router::<Member>()
        .route("/register", post(membership::register))
        .route("/{id}/renew", post(membership::renew))
        .route("/{id}/status", get(membership::status))
}
