//! Promotional offer model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `offers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Offer {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub discount_percent: f64,
    pub valid_from: Option<Date>,
    pub valid_until: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveOffer {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0))]
    pub discount_percent: f64,
    pub valid_from: Option<Date>,
    pub valid_until: Option<Date>,
}

impl Searchable for Offer {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.title.as_str()), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Offer {
    const ENTITY: &'static str = "Offer";
    const TABLE: &'static str = "offers";
    const COLUMNS: &'static str = "id, title, description, discount_percent, valid_from, \
        valid_until, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "discount_percent",
        "valid_from",
        "valid_until",
    ];

    type Input = SaveOffer;

    fn bind_input<'q>(input: &'q SaveOffer, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.discount_percent)
            .bind(input.valid_from)
            .bind(input.valid_until)
    }
}
