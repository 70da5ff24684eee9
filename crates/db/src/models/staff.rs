//! Staff entity model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `staff` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Staff {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
    pub salary: f64,
    pub joining_date: Option<Date>,
    pub address: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating or fully replacing a staff record.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveStaff {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub designation: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub salary: f64,
    pub joining_date: Option<Date>,
    pub address: Option<String>,
}

impl Searchable for Staff {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.designation.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Collection for Staff {
    const ENTITY: &'static str = "Staff";
    const TABLE: &'static str = "staff";
    const COLUMNS: &'static str = "id, name, email, phone, designation, salary, joining_date, \
        address, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "name",
        "email",
        "phone",
        "designation",
        "salary",
        "joining_date",
        "address",
    ];
    const ORDER_BY: &'static str = "name ASC, id ASC";

    type Input = SaveStaff;

    fn bind_input<'q>(input: &'q SaveStaff, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.designation)
            .bind(input.salary)
            .bind(input.joining_date)
            .bind(&input.address)
    }
}
