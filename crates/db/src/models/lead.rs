//! Lead (prospective member) model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `leads` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Lead {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub interested_plan: Option<String>,
    pub follow_up_date: Option<Date>,
    pub status: String,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a lead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveLead {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub source: Option<String>,
    pub interested_plan: Option<String>,
    pub follow_up_date: Option<Date>,
    /// Defaults to `new` if omitted.
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl Searchable for Lead {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.source.as_deref(),
            Some(self.status.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Collection for Lead {
    const ENTITY: &'static str = "Lead";
    const TABLE: &'static str = "leads";
    const COLUMNS: &'static str = "id, name, email, phone, source, interested_plan, \
        follow_up_date, status, notes, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "source",
        "interested_plan",
        "follow_up_date",
        "status",
        "notes",
    ];

    type Input = SaveLead;

    fn bind_input<'q>(input: &'q SaveLead, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.source)
            .bind(&input.interested_plan)
            .bind(input.follow_up_date)
            .bind(input.status.as_deref().unwrap_or("new"))
            .bind(&input.notes)
    }
}
