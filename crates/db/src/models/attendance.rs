//! Attendance (check-in / check-out) model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `attendance` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attendance {
    pub id: DbId,
    pub member_id: Option<DbId>,
    pub member_name: String,
    pub check_in: Timestamp,
    pub check_out: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveAttendance {
    pub member_id: Option<DbId>,
    #[validate(length(min = 1, message = "member_name must not be empty"))]
    pub member_name: String,
    pub check_in: Timestamp,
    pub check_out: Option<Timestamp>,
}

impl Searchable for Attendance {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.member_name.as_str()]
    }
}

impl Collection for Attendance {
    const ENTITY: &'static str = "Attendance";
    const TABLE: &'static str = "attendance";
    const COLUMNS: &'static str =
        "id, member_id, member_name, check_in, check_out, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["member_id", "member_name", "check_in", "check_out"];
    const ORDER_BY: &'static str = "check_in DESC, id DESC";

    type Input = SaveAttendance;

    fn bind_input<'q>(
        input: &'q SaveAttendance,
        query: RowQuery<'q, Self>,
    ) -> RowQuery<'q, Self> {
        query
            .bind(input.member_id)
            .bind(&input.member_name)
            .bind(input.check_in)
            .bind(input.check_out)
    }
}
