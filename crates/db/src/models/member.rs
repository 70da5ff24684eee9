//! Member entity model and DTOs.

use gym_core::billing::{quote_for, BillingQuote};
use gym_core::listing::Searchable;
use gym_core::membership::expiry_date;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};
use crate::models::renewal::Renewal;
use crate::models::transaction::Transaction;

/// Default status for newly enrolled members.
pub const MEMBER_STATUS_ACTIVE: &str = "active";

/// A row from the `members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Member {
    pub id: DbId,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: String,
    pub gender: Option<String>,
    pub date_of_birth: Option<Date>,
    pub address: Option<String>,
    pub plan: String,
    pub months_paid: i32,
    pub billing_amount: f64,
    pub pack_amount: f64,
    pub discount: f64,
    pub tax_percent: f64,
    pub total_amount: f64,
    pub joining_date: Date,
    pub expiry_date: Option<Date>,
    pub trainer_id: Option<DbId>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Member {
    /// First and last name joined for display and transaction records.
    pub fn full_name(&self) -> String {
        match self.last_name.as_deref() {
            Some(last) if !last.trim().is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// DTO for creating or fully replacing a member.
///
/// Months, billing, pack and total amounts are never accepted from the
/// caller; they are derived from `plan`, `discount` and `tax_percent`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveMember {
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
    pub plan: String,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub tax_percent: f64,
    pub joining_date: Date,
    /// Derived from `joining_date` and the plan length when omitted.
    pub expiry_date: Option<Date>,
    pub trainer_id: Option<DbId>,
    pub status: Option<String>,
}

/// Billing terms of a renewal, already resolved against the plan table.
#[derive(Debug, Clone)]
pub struct RenewalTerms {
    pub plan: String,
    pub quote: BillingQuote,
    pub renewed_on: Date,
    /// New expiry: the renewal start plus the plan length.
    pub expiry_date: Date,
    pub payment_method: String,
}

/// Rows written by a registration.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub member: Member,
    pub transaction: Transaction,
}

/// Rows written by a renewal.
#[derive(Debug, Clone, Serialize)]
pub struct RenewalReceipt {
    pub member: Member,
    pub renewal: Renewal,
    pub transaction: Transaction,
}

impl Searchable for Member {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.first_name.as_str()),
            self.last_name.as_deref(),
            self.email.as_deref(),
            Some(self.phone.as_str()),
            Some(self.plan.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Collection for Member {
    const ENTITY: &'static str = "Member";
    const TABLE: &'static str = "members";
    const COLUMNS: &'static str = "id, first_name, last_name, email, phone, gender, \
        date_of_birth, address, plan, months_paid, billing_amount, pack_amount, discount, \
        tax_percent, total_amount, joining_date, expiry_date, trainer_id, status, \
        created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "first_name",
        "last_name",
        "email",
        "phone",
        "gender",
        "date_of_birth",
        "address",
        "plan",
        "months_paid",
        "billing_amount",
        "pack_amount",
        "discount",
        "tax_percent",
        "total_amount",
        "joining_date",
        "expiry_date",
        "trainer_id",
        "status",
    ];

    type Input = SaveMember;

    fn bind_input<'q>(input: &'q SaveMember, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        let quote = quote_for(&input.plan, input.discount, input.tax_percent);
        let expiry = input
            .expiry_date
            .or_else(|| expiry_date(input.joining_date, quote.months_paid).ok());

        query
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.gender)
            .bind(input.date_of_birth)
            .bind(&input.address)
            .bind(&input.plan)
            .bind(quote.months_paid as i32)
            .bind(quote.base_amount)
            .bind(quote.pack_amount)
            .bind(quote.discount)
            .bind(quote.tax_percent)
            .bind(quote.total_rounded())
            .bind(input.joining_date)
            .bind(expiry)
            .bind(input.trainer_id)
            .bind(input.status.as_deref().unwrap_or(MEMBER_STATUS_ACTIVE))
    }
}
