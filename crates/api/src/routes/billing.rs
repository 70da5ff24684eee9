use axum::routing::{get, post};
use axum::Router;

use crate::handlers::billing;
use crate::state::AppState;

/// Routes mounted at `/billing`.
///
/// ```text
/// GET    /plans             -> list_plans
/// POST   /quote             -> quote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans", get(billing::list_plans))
        .route("/quote", post(billing::quote))
}
