pub mod admin;
pub mod auth;
pub mod billing;
pub mod collection;
pub mod dashboard;
pub mod health;
pub mod members;

use axum::Router;
use gym_db::models::{
    attendance::Attendance, booking::Booking, diet::Diet, event::Event, expense::Expense,
    lead::Lead, offer::Offer, post::Post, renewal::Renewal, service::Service, staff::Staff,
    transaction::Transaction, workout::Workout,
};

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                                      login (public)
/// /auth/me                                         current user
///
/// /admin/users                                     list, create (admin only)
/// /admin/users/{id}                                get, update, delete
/// /admin/users/{id}/reset-password                 reset password
///
/// /billing/plans                                   plan table
/// /billing/quote                                   compute a quote (POST)
///
/// /dashboard/stats                                 dashboard counters
///
/// /members                                         list, create
/// /members/{id}                                    get, replace, delete
/// /members/register                                enroll + first payment (POST)
/// /members/{id}/renew                              renew + payment (POST)
/// /members/{id}/status                             active / expiring / expired
///
/// /{collection}                                    list, create
/// /{collection}/{id}                               get, replace, delete
///     staff, leads, events, offers, bookings, diets, workouts, expenses,
///     renewals, attendance, transactions, services, posts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/admin/users", admin::router())
        .nest("/billing", billing::router())
        .nest("/dashboard", dashboard::router())
        .nest("/members", members::router())
        .nest("/staff", collection::router::<Staff>())
        .nest("/leads", collection::router::<Lead>())
        .nest("/events", collection::router::<Event>())
        .nest("/offers", collection::router::<Offer>())
        .nest("/bookings", collection::router::<Booking>())
        .nest("/diets", collection::router::<Diet>())
        .nest("/workouts", collection::router::<Workout>())
        .nest("/expenses", collection::router::<Expense>())
        .nest("/renewals", collection::router::<Renewal>())
        .nest("/attendance", collection::router::<Attendance>())
        .nest("/transactions", collection::router::<Transaction>())
        .nest("/services", collection::router::<Service>())
        .nest("/posts", collection::router::<Post>())
}
