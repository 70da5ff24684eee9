//! Generic CRUD routes, mounted once per collection.

use axum::routing::get;
use axum::Router;
use gym_db::collection::Collection;

use crate::handlers::collection;
use crate::state::AppState;

/// CRUD routes for collection `C`.
///
/// ```text
/// GET    /                  -> list (?search=&page=&page_size=)
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> replace
/// DELETE /{id}              -> delete
/// ```
pub fn router<C: Collection>() -> Router<AppState> {
    Router::new()
        .route("/", get(collection::list::<C>).post(collection::create::<C>))
        .route(
            "/{id}",
            get(collection::get_by_id::<C>)
                .put(collection::replace::<C>)
                .delete(collection::delete::<C>),
        )
}
