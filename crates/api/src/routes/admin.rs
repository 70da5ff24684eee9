use axum::routing::{get, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin/users`. Every route requires the admin role.
///
/// ```text
/// GET, POST          /                      -> list_users, create_user
/// GET, PUT, DELETE   /{id}                  -> get_user, update_user, delete_user
/// POST               /{id}/reset-password   -> reset_password
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(admin::list_users).post(admin::create_user))
        .route(
            "/{id}",
            get(admin::get_user)
                .put(admin::update_user)
                .delete(admin::delete_user),
        )
        .route("/{id}/reset-password", post(admin::reset_password))
}
