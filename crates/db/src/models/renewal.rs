//! Membership renewal model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `renewals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Renewal {
    pub id: DbId,
    pub member_id: Option<DbId>,
    pub plan: String,
    pub months_paid: i32,
    pub amount: f64,
    pub discount: f64,
    pub tax_percent: f64,
    pub renewed_on: Date,
    pub expiry_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a renewal record.
///
/// Renewals are normally written by the member renewal endpoint; this DTO
/// backs manual corrections from the renewals screen.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveRenewal {
    pub member_id: Option<DbId>,
    #[validate(length(min = 1, message = "plan must not be empty"))]
    pub plan: String,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub months_paid: i32,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax_percent: f64,
    pub renewed_on: Date,
    pub expiry_date: Option<Date>,
}

impl Searchable for Renewal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.plan.as_str()]
    }
}

impl Collection for Renewal {
    const ENTITY: &'static str = "Renewal";
    const TABLE: &'static str = "renewals";
    const COLUMNS: &'static str = "id, member_id, plan, months_paid, amount, discount, \
        tax_percent, renewed_on, expiry_date, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "member_id",
        "plan",
        "months_paid",
        "amount",
        "discount",
        "tax_percent",
        "renewed_on",
        "expiry_date",
    ];
    const ORDER_BY: &'static str = "renewed_on DESC, id DESC";

    type Input = SaveRenewal;

    fn bind_input<'q>(input: &'q SaveRenewal, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(input.member_id)
            .bind(&input.plan)
            .bind(input.months_paid)
            .bind(input.amount)
            .bind(input.discount)
            .bind(input.tax_percent)
            .bind(input.renewed_on)
            .bind(input.expiry_date)
    }
}
