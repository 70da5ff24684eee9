//! Handlers for member enrollment, renewal and membership status.
//!
//! Plain member CRUD goes through the generic collection handlers; these
//! endpoints add the billing side: every enrollment and renewal records a
//! transaction priced by the plan table.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gym_core::billing::{plan_terms, quote_for};
use gym_core::error::CoreError;
use gym_core::membership::{expiry_date, renewal_start, MembershipStatus};
use gym_core::types::{Date, DbId};
use gym_db::collection::CollectionRepo;
use gym_db::models::member::{Member, Registration, RenewalReceipt, RenewalTerms, SaveMember};
use gym_db::models::transaction::DEFAULT_PAYMENT_METHOD;
use gym_db::repositories::MemberRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::billing::AmountInput;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /members/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterMemberRequest {
    #[validate(length(min = 1, message = "first_name must not be empty"))]
    pub first_name: String,
    pub last_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "phone must not be empty"))]
    pub phone: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
    pub trainer_id: Option<DbId>,
    pub plan: String,
    #[serde(default)]
    pub discount: AmountInput,
    #[serde(default)]
    pub tax_percent: AmountInput,
    /// Defaults to today.
    pub joining_date: Option<Date>,
    /// Defaults to `cash`.
    pub payment_method: Option<String>,
}

/// Request body for `POST /members/{id}/renew`.
#[derive(Debug, Deserialize)]
pub struct RenewMemberRequest {
    pub plan: String,
    #[serde(default)]
    pub discount: AmountInput,
    #[serde(default)]
    pub tax_percent: AmountInput,
    pub payment_method: Option<String>,
}

/// Response body for `GET /members/{id}/status`.
#[derive(Debug, Serialize)]
pub struct MembershipStatusResponse {
    pub member_id: DbId,
    pub expiry_date: Option<Date>,
    /// `None` when the member has no expiry date recorded.
    pub status: Option<MembershipStatus>,
    /// Days until expiry; negative once lapsed.
    pub days_left: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/members/register
///
/// Enroll a member on a plan and record the first payment. The plan must be
/// one of the known plans; billing figures are derived, never accepted.
pub async fn register(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<RegisterMemberRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Registration>>)> {
    input.validate()?;
    ensure_known_plan(&input.plan)?;

    let today = Utc::now().date_naive();
    let payment_method = input
        .payment_method
        .clone()
        .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

    let member = SaveMember {
        first_name: input.first_name,
        last_name: input.last_name,
        email: input.email,
        phone: input.phone,
        gender: input.gender,
        date_of_birth: input.date_of_birth,
        address: input.address,
        plan: input.plan,
        discount: input.discount.value(),
        tax_percent: input.tax_percent.value(),
        joining_date: input.joining_date.unwrap_or(today),
        expiry_date: None,
        trainer_id: input.trainer_id,
        status: None,
    };

    let registration = MemberRepo::register(&state.pool, &member, &payment_method, today).await?;
    tracing::info!(
        member_id = registration.member.id,
        plan = %registration.member.plan,
        total = registration.member.total_amount,
        user_id = user.user_id,
        "Member registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// POST /api/v1/members/{id}/renew
///
/// Extend a membership by a plan. An unexpired membership is extended from
/// its current expiry date; a lapsed one starts again today.
pub async fn renew(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<RenewMemberRequest>,
) -> AppResult<Json<DataResponse<RenewalReceipt>>> {
    ensure_known_plan(&input.plan)?;

    let member = find_member(&state, id).await?;
    let today = Utc::now().date_naive();
    let quote = quote_for(&input.plan, input.discount.value(), input.tax_percent.value());
    let start = renewal_start(member.expiry_date, today);
    let new_expiry = expiry_date(start, quote.months_paid)?;

    let terms = RenewalTerms {
        plan: input.plan,
        quote,
        renewed_on: today,
        expiry_date: new_expiry,
        payment_method: input
            .payment_method
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
    };

    let receipt = MemberRepo::renew(&state.pool, id, &terms)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))?;
    tracing::info!(
        member_id = id,
        plan = %terms.plan,
        expiry = %new_expiry,
        user_id = user.user_id,
        "Membership renewed"
    );

    Ok(Json(DataResponse { data: receipt }))
}

/// GET /api/v1/members/{id}/status
pub async fn status(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MembershipStatusResponse>>> {
    let member = find_member(&state, id).await?;
    let today = Utc::now().date_naive();

    Ok(Json(DataResponse {
        data: MembershipStatusResponse {
            member_id: member.id,
            expiry_date: member.expiry_date,
            status: member
                .expiry_date
                .map(|expiry| MembershipStatus::as_of(expiry, today)),
            days_left: member.expiry_date.map(|expiry| (expiry - today).num_days()),
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn ensure_known_plan(plan: &str) -> AppResult<()> {
    if plan_terms(plan).is_none() {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown plan '{plan}'"
        ))));
    }
    Ok(())
}

async fn find_member(state: &AppState, id: DbId) -> AppResult<Member> {
    CollectionRepo::<Member>::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Member",
            id,
        }))
}
