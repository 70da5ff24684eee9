//! Generic handlers shared by every back-office collection.
//!
//! Each handler is instantiated per row type by
//! [`routes::collection::router`](crate::routes::collection::router), so
//! `GET /api/v1/members` and `GET /api/v1/expenses` run the same code.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use gym_core::error::CoreError;
use gym_core::listing::{page_of, Page};
use gym_core::types::DbId;
use gym_db::collection::{Collection, CollectionRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::ListParams;
use crate::state::AppState;

/// GET /api/v1/{collection}
///
/// Loads the whole collection, then filters by `search` and returns the
/// requested page. `total` counts every match across pages.
pub async fn list<C: Collection>(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Page<C>>> {
    let rows = CollectionRepo::<C>::list_all(&state.pool).await?;
    Ok(Json(page_of(
        &rows,
        params.search(),
        params.page(),
        params.page_size(),
    )))
}

/// GET /api/v1/{collection}/{id}
pub async fn get_by_id<C: Collection>(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<C>> {
    let row = CollectionRepo::<C>::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: C::ENTITY,
            id,
        }))?;
    Ok(Json(row))
}

/// POST /api/v1/{collection}
pub async fn create<C: Collection>(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<C::Input>,
) -> AppResult<(StatusCode, Json<C>)> {
    input.validate()?;
    let row = CollectionRepo::<C>::create(&state.pool, &input).await?;
    tracing::info!(entity = C::ENTITY, user_id = user.user_id, "Record created");
    Ok((StatusCode::CREATED, Json(row)))
}

/// PUT /api/v1/{collection}/{id}
///
/// Full-record replace: every writable column takes the value in the body.
pub async fn replace<C: Collection>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<C::Input>,
) -> AppResult<Json<C>> {
    input.validate()?;
    let row = CollectionRepo::<C>::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: C::ENTITY,
            id,
        }))?;
    tracing::info!(entity = C::ENTITY, id, user_id = user.user_id, "Record replaced");
    Ok(Json(row))
}

/// DELETE /api/v1/{collection}/{id}
pub async fn delete<C: Collection>(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CollectionRepo::<C>::delete(&state.pool, id).await? {
        tracing::info!(entity = C::ENTITY, id, user_id = user.user_id, "Record deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: C::ENTITY,
            id,
        }))
    }
}
