//! Club event model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub event_date: Date,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveEvent {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub event_date: Date,
    pub location: Option<String>,
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.title.as_str()), self.location.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Event {
    const ENTITY: &'static str = "Event";
    const TABLE: &'static str = "events";
    const COLUMNS: &'static str =
        "id, title, description, event_date, location, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &["title", "description", "event_date", "location"];
    const ORDER_BY: &'static str = "event_date DESC, id DESC";

    type Input = SaveEvent;

    fn bind_input<'q>(input: &'q SaveEvent, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.event_date)
            .bind(&input.location)
    }
}
