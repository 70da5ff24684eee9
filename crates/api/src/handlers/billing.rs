//! Handlers for the `/billing` resource (plan table and quotes).

use axum::Json;
use gym_core::billing::{known_plans, parse_amount, quote_for, BillingQuote, Plan};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// A discount or tax figure as typed into a form.
///
/// Accepts a JSON number or a free-form string; a string that does not
/// parse counts as zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl Default for AmountInput {
    fn default() -> Self {
        AmountInput::Text(String::new())
    }
}

impl AmountInput {
    pub fn value(&self) -> f64 {
        match self {
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => parse_amount(s),
        }
    }
}

/// Request body for `POST /billing/quote`.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub discount: AmountInput,
    #[serde(default)]
    pub tax_percent: AmountInput,
}

/// A quote plus its two-decimal rendering and the tax it includes.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub quote: BillingQuote,
    pub tax_amount: f64,
    pub total_display: String,
}

impl From<BillingQuote> for QuoteResponse {
    fn from(quote: BillingQuote) -> Self {
        Self {
            tax_amount: quote.tax_amount(),
            total_display: quote.total_display(),
            quote,
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/billing/plans
pub async fn list_plans(_user: AuthUser) -> Json<DataResponse<&'static [Plan]>> {
    Json(DataResponse {
        data: known_plans(),
    })
}

/// POST /api/v1/billing/quote
///
/// Never fails on the figures themselves: unknown plans price at zero and
/// unparseable numbers count as zero.
pub async fn quote(
    _user: AuthUser,
    Json(input): Json<QuoteRequest>,
) -> AppResult<Json<DataResponse<QuoteResponse>>> {
    let quote = quote_for(&input.plan, input.discount.value(), input.tax_percent.value());
    Ok(Json(DataResponse { data: quote.into() }))
}
