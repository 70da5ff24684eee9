//! Handlers for the `/dashboard` resource.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use gym_db::models::dashboard::DashboardStats;
use gym_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Counters as of the current UTC date.
pub async fn stats(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let today = Utc::now().date_naive();
    let stats = DashboardRepo::stats(&state.pool, today).await?;
    Ok(Json(DataResponse { data: stats }))
}
