//! Diet plan model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `diets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Diet {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Member the diet is assigned to, if any.
    pub member_id: Option<DbId>,
    pub calories: Option<i32>,
    pub meals: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveDiet {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub member_id: Option<DbId>,
    #[validate(range(min = 0))]
    pub calories: Option<i32>,
    pub meals: Option<String>,
}

impl Searchable for Diet {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.description.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Diet {
    const ENTITY: &'static str = "Diet";
    const TABLE: &'static str = "diets";
    const COLUMNS: &'static str =
        "id, name, description, member_id, calories, meals, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["name", "description", "member_id", "calories", "meals"];

    type Input = SaveDiet;

    fn bind_input<'q>(input: &'q SaveDiet, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.member_id)
            .bind(input.calories)
            .bind(&input.meals)
    }
}
