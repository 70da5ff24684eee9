//! HTTP-level tests for the dashboard.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, staff_token};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn stats_reflect_registrations(pool: PgPool) {
    let token = staff_token(1);
    let app = common::build_test_app(pool);

    let body = json!({
        "first_name": "Tara",
        "phone": "9000000020",
        "plan": "Monthly"
    });
    let response = post_json_auth(app.clone(), "/api/v1/members/register", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_auth(app, "/api/v1/dashboard/stats", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats = &body_json(response).await["data"];
    assert_eq!(stats["total_members"], 1);
    assert_eq!(stats["active_members"], 1);
    assert_eq!(stats["expiring_soon"], 0);
    assert_eq!(stats["revenue_this_month"], 3500.0);
    assert_eq!(stats["attendance_today"], 0);
}
