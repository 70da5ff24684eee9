//! Gym service (personal training, spa, ...) model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `services` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveService {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Service {
    const ENTITY: &'static str = "Service";
    const TABLE: &'static str = "services";
    const COLUMNS: &'static str = "id, name, description, price, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &["name", "description", "price"];
    const ORDER_BY: &'static str = "name ASC, id ASC";

    type Input = SaveService;

    fn bind_input<'q>(input: &'q SaveService, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
    }
}
