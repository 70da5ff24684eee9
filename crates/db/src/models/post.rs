//! Notice-board post model and DTOs.

use gym_core::listing::Searchable;
use gym_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::collection::{Collection, RowQuery};

/// A row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SavePost {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[serde(default)]
    pub body: String,
    pub author: Option<String>,
}

impl Searchable for Post {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.title.as_str()), self.author.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl Collection for Post {
    const ENTITY: &'static str = "Post";
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static str = "id, title, body, author, created_at, updated_at";
    const WRITE_COLUMNS: &'static [&'static str] = &["title", "body", "author"];

    type Input = SavePost;

    fn bind_input<'q>(input: &'q SavePost, query: RowQuery<'q, Self>) -> RowQuery<'q, Self> {
        query
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.author)
    }
}
