//! Service booking model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub member_id: Option<DbId>,
    pub name: String,
    pub phone: Option<String>,
    pub service: String,
    pub booking_date: Date,
    pub slot: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveBooking {
    pub member_id: Option<DbId>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "service must not be empty"))]
    pub service: String,
    pub booking_date: Date,
    pub slot: Option<String>,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
}

impl Searchable for Booking {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.name.as_str()),
            self.phone.as_deref(),
            Some(self.service.as_str()),
            Some(self.status.as_str()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Collection for Booking {
    const ENTITY: &'static str = "Booking";
    const TABLE: &'static str = "bookings";
    const COLUMNS: &'static str = "id, member_id, name, phone, service, booking_date, slot, \
        status, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "member_id",
        "name",
        "phone",
        "service",
        "booking_date",
        "slot",
        "status",
    ];
    const ORDER_BY: &'static str = "booking_date DESC, id DESC";

    type Input = SaveBooking;

    fn bind_input<'q>(input: &'q SaveBooking, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(input.member_id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.service)
            .bind(input.booking_date)
            .bind(&input.slot)
            .bind(input.status.as_deref().unwrap_or("pending"))
    }
}
