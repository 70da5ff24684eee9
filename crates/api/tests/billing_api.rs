//! HTTP-level tests for the billing endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, staff_token};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn plans_are_listed_in_display_order(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/billing/plans", &staff_token(1)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let plans = json["data"].as_array().unwrap();
    assert_eq!(plans.len(), 8);
    assert_eq!(plans[0]["id"], "Monthly");
    assert_eq!(plans[2]["id"], "Quaterly");
    assert_eq!(plans[2]["months"], 3);
    assert_eq!(plans[2]["amount"], 7500.0);
    assert_eq!(plans[7]["id"], "12 + 2 Months");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_applies_discount_then_tax(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "plan": "Annual", "discount": "3000", "tax_percent": "18" });
    let response = post_json_auth(app, "/api/v1/billing/quote", body, &staff_token(1)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let quote = &body_json(response).await["data"];
    assert_eq!(quote["months_paid"], 12);
    assert_eq!(quote["base_amount"], 18000.0);
    assert_eq!(quote["pack_amount"], 18000.0);
    assert_eq!(quote["total_amount"], 17700.0);
    assert_eq!(quote["tax_amount"], 2700.0);
    assert_eq!(quote["total_display"], "17700.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_never_fails_on_bad_figures(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "plan": "Weekly", "discount": "ten", "tax_percent": "" });
    let response = post_json_auth(app, "/api/v1/billing/quote", body, &staff_token(1)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let quote = &body_json(response).await["data"];
    assert_eq!(quote["months_paid"], 0);
    assert_eq!(quote["total_amount"], 0.0);
    assert_eq!(quote["total_display"], "0.00");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn quote_accepts_numeric_figures(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "plan": "Monthly", "discount": 1, "tax_percent": 1.5 });
    let response = post_json_auth(app, "/api/v1/billing/quote", body, &staff_token(1)).await;

    let quote = &body_json(response).await["data"];
    // A discount of 1 is ignored; a tax of 1.5 percent applies.
    assert_eq!(quote["discount"], 0.0);
    assert_eq!(quote["total_amount"], 3552.5);
}
