//! Expense model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `expenses` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: DbId,
    pub title: String,
    pub category: Option<String>,
    pub amount: f64,
    pub expense_date: Date,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveExpense {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub category: Option<String>,
    #[validate(range(min = 0.0))]
    pub amount: f64,
    pub expense_date: Date,
    pub notes: Option<String>,
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.title.as_str()), self.category.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Expense {
    const ENTITY: &'static str = "Expense";
    const TABLE: &'static str = "expenses";
    const COLUMNS: &'static str =
        "id, title, category, amount, expense_date, notes, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["title", "category", "amount", "expense_date", "notes"];
    const ORDER_BY: &'static str = "expense_date DESC, id DESC";

    type Input = SaveExpense;

    fn bind_input<'q>(input: &'q SaveExpense, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.category)
            .bind(input.amount)
            .bind(input.expense_date)
            .bind(&input.notes)
    }
}
