//! Billing transaction model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// Payment method recorded when none is given.
pub const DEFAULT_PAYMENT_METHOD: &str = "cash";

/// A row from the `transactions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub member_id: Option<DbId>,
    pub member_name: String,
    pub plan: String,
    pub amount: f64,
    pub discount: f64,
    pub tax_percent: f64,
    pub payment_method: String,
    pub paid_on: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveTransaction {
    pub member_id: Option<DbId>,
    #[validate(length(min = 1, message = "member_name must not be empty"))]
    pub member_name: String,
    pub plan: String,
    pub amount: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax_percent: f64,
    pub payment_method: Option<String>,
    pub paid_on: Date,
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.member_name.as_str(),
            self.plan.as_str(),
            self.payment_method.as_str(),
        ]
    }
}

impl Collection for Transaction {
    const ENTITY: &'static str = "Transaction";
    const TABLE: &'static str = "transactions";
    const COLUMNS: &'static str = "id, member_id, member_name, plan, amount, discount, \
        tax_percent, payment_method, paid_on, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "member_id",
        "member_name",
        "plan",
        "amount",
        "discount",
        "tax_percent",
        "payment_method",
        "paid_on",
    ];
    const ORDER_BY: &'static str = "paid_on DESC, id DESC";

    type Input = SaveTransaction;

    fn bind_input<'q>(
        input: &'q SaveTransaction,
        query: RowQuery<'q, Self>,
    ) -> RowQuery<'q, Self> {
        query
            .bind(input.member_id)
            .bind(&input.member_name)
            .bind(&input.plan)
            .bind(input.amount)
            .bind(input.discount)
            .bind(input.tax_percent)
            .bind(
                input
                    .payment_method
                    .as_deref()
                    .unwrap_or(DEFAULT_PAYMENT_METHOD),
            )
            .bind(input.paid_on)
    }
}
