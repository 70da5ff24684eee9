//! HTTP-level tests for member registration, renewal and status.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Months, Utc};
use common::{body_json, get_auth, post_json_auth, staff_token};
use gym_db::collection::CollectionRepo;
use gym_db::models::member::{Member, SaveMember};
use serde_json::json;
use sqlx::PgPool;

fn registration(plan: &str) -> serde_json::Value {
    json!({
        "first_name": "Nisha",
        "last_name": "Verma",
        "phone": "9000000010",
        "plan": plan,
        "discount": "500",
        "tax_percent": "18",
        "joining_date": "2024-01-10",
        "payment_method": "upi"
    })
}

/// Insert a member directly with the given expiry date.
async fn member_expiring(pool: &PgPool, expiry: chrono::NaiveDate) -> Member {
    CollectionRepo::<Member>::create(
        pool,
        &SaveMember {
            first_name: "Omar".to_string(),
            last_name: None,
            email: None,
            phone: "9000000011".to_string(),
            gender: None,
            date_of_birth: None,
            address: None,
            plan: "Monthly".to_string(),
            discount: 0.0,
            tax_percent: 0.0,
            joining_date: expiry - Duration::days(30),
            expiry_date: Some(expiry),
            trainer_id: None,
            status: None,
        },
    )
    .await
    .expect("member insert should succeed")
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_creates_member_and_transaction(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/members/register",
        registration("Quaterly"),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = &body_json(response).await["data"];
    assert_eq!(data["member"]["months_paid"], 3);
    // (7500 - 500) * 1.18
    assert_eq!(data["member"]["total_amount"], 8260.0);
    assert_eq!(data["member"]["expiry_date"], "2024-04-10");
    assert_eq!(data["transaction"]["member_id"], data["member"]["id"]);
    assert_eq!(data["transaction"]["member_name"], "Nisha Verma");
    assert_eq!(data["transaction"]["amount"], 8260.0);
    assert_eq!(data["transaction"]["payment_method"], "upi");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_unknown_plan(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/members/register",
        registration("Quarterly"),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Renewal
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn early_renewal_extends_from_current_expiry(pool: PgPool) {
    let today = Utc::now().date_naive();
    let expiry = today + Duration::days(5);
    let member = member_expiring(&pool, expiry).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        &format!("/api/v1/members/{}/renew", member.id),
        json!({ "plan": "Monthly", "payment_method": "card" }),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    let expected = expiry.checked_add_months(Months::new(1)).unwrap();
    assert_eq!(data["member"]["expiry_date"], expected.to_string());
    assert_eq!(data["renewal"]["expiry_date"], expected.to_string());
    assert_eq!(data["renewal"]["renewed_on"], today.to_string());
    assert_eq!(data["transaction"]["amount"], 3500.0);
    assert_eq!(data["transaction"]["payment_method"], "card");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn lapsed_renewal_starts_today(pool: PgPool) {
    let today = Utc::now().date_naive();
    let member = member_expiring(&pool, today - Duration::days(40)).await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(
        app,
        &format!("/api/v1/members/{}/renew", member.id),
        json!({ "plan": "Annual" }),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    let expected = today.checked_add_months(Months::new(12)).unwrap();
    assert_eq!(data["member"]["expiry_date"], expected.to_string());
    assert_eq!(data["transaction"]["payment_method"], "cash");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn renewing_missing_member_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json_auth(
        app,
        "/api/v1/members/999999/renew",
        json!({ "plan": "Monthly" }),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn status_reports_expiring_soon(pool: PgPool) {
    let today = Utc::now().date_naive();
    let member = member_expiring(&pool, today + Duration::days(3)).await;
    let app = common::build_test_app(pool);

    let response = get_auth(
        app,
        &format!("/api/v1/members/{}/status", member.id),
        &staff_token(1),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["status"], "expiring_soon");
    assert_eq!(data["days_left"], 3);
}
