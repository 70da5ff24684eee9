//! Workout programme model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub member_id: Option<DbId>,
    pub level: Option<String>,
    pub schedule: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveWorkout {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub member_id: Option<DbId>,
    pub level: Option<String>,
    pub schedule: Option<String>,
}

impl Searchable for Workout {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.level.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Workout {
    const ENTITY: &'static str = "Workout";
    const TABLE: &'static str = "workouts";
    const COLUMNS: &'static str =
        "id, name, description, member_id, level, schedule, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] =
        &["name", "description", "member_id", "level", "schedule"];

    type Input = SaveWorkout;

    fn bind_input<'q>(input: &'q SaveWorkout, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.member_id)
            .bind(&input.level)
            .bind(&input.schedule)
    }
}
