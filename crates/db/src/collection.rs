//! Generic CRUD over a named table.
//!
//! Every back-office collection (members, staff, leads, ...) is a flat table
//! whose columns mirror the row struct one-to-one. Instead of one repository
//! per table, each row type implements [`Collection`] and the zero-sized
//! [`CollectionRepo`] provides the five operations for all of them.

use std::marker::PhantomData;

use gym_core::listing::Searchable;
use gym_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, PgPool, Postgres};
use validator::Validate;

/// A `query_as` builder producing rows of type `R`.
pub type RowQuery<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// A row type stored in its own table and managed through generic CRUD.
pub trait Collection:
    for<'r> FromRow<'r, PgRow> + Serialize + Searchable + Clone + Send + Sync + Unpin + 'static
{
    /// Human-readable entity name used in not-found errors.
    const ENTITY: &'static str;
    /// Table name.
    const TABLE: &'static str;
    /// Full select list, including `id`, `created_at` and `updated_at`.
    const COLUMNS: &'static str;
    /// Columns written on insert and replace, in [`Collection::bind_input`] order.
    const WRITE_COLUMNS: &'static [&'static str];
    /// `ORDER BY` clause applied when listing.
    const ORDER_BY: &'static str = "id DESC";

    /// Body accepted by create and full-record replace.
    type Input: DeserializeOwned + Validate + Send + Sync + 'static;

    /// Bind one value per entry of [`Collection::WRITE_COLUMNS`], in order.
    fn bind_input<'q>(input: &'q Self::Input, query: RowQuery<'q, Self>) -> RowQuery<'q, Self>;
}

// ---------------------------------------------------------------------------
// SQL builders
// ---------------------------------------------------------------------------

/// `SELECT` of every row in listing order.
pub fn select_all_sql<C: Collection>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        C::COLUMNS,
        C::TABLE,
        C::ORDER_BY
    )
}

/// `INSERT` binding `$1..$n` to the write columns, returning the new row.
pub fn insert_sql<C: Collection>() -> String {
    let placeholders: Vec<String> = (1..=C::WRITE_COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        C::TABLE,
        C::WRITE_COLUMNS.join(", "),
        placeholders.join(", "),
        C::COLUMNS
    )
}

/// `UPDATE` keyed by `$1`, assigning `$2..$n+1` to the write columns.
pub fn replace_sql<C: Collection>() -> String {
    let assignments: Vec<String> = C::WRITE_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE id = $1 RETURNING {}",
        C::TABLE,
        assignments.join(", "),
        C::COLUMNS
    )
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Provides CRUD operations for any [`Collection`].
pub struct CollectionRepo<C>(PhantomData<C>);

impl<C: Collection> CollectionRepo<C> {
    /// Every row of the collection, in [`Collection::ORDER_BY`] order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<C>, sqlx::Error> {
        let query = select_all_sql::<C>();
        sqlx::query_as::<_, C>(&query).fetch_all(pool).await
    }

    /// Find a row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<C>, sqlx::Error> {
        let query = format!("SELECT {} FROM {} WHERE id = $1", C::COLUMNS, C::TABLE);
        sqlx::query_as::<_, C>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new row, returning it with its assigned ID.
    pub async fn create(pool: &PgPool, input: &C::Input) -> Result<C, sqlx::Error> {
        let query = insert_sql::<C>();
        C::bind_input(input, sqlx::query_as::<_, C>(&query))
            .fetch_one(pool)
            .await
    }

    /// Replace every writable column of the row with the given ID.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &C::Input,
    ) -> Result<Option<C>, sqlx::Error> {
        let query = replace_sql::<C>();
        C::bind_input(input, sqlx::query_as::<_, C>(&query).bind(id))
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let query = format!("DELETE FROM {} WHERE id = $1", C::TABLE);
        let result = sqlx::query(&query).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of rows in the collection.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let query = format!("SELECT COUNT(*) FROM {}", C::TABLE);
        sqlx::query_scalar::<_, i64>(&query).fetch_one(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use crate::models::post::Post;

    #[test]
    fn insert_numbers_every_write_column() {
        assert_eq!(
            insert_sql::<Post>(),
            "INSERT INTO posts (title, body, author) VALUES ($1, $2, $3) \
             RETURNING id, title, body, author, created_at, updated_at"
        );
    }

    #[test]
    fn replace_reserves_first_placeholder_for_id() {
        assert_eq!(
            replace_sql::<Post>(),
            "UPDATE posts SET title = $2, body = $3, author = $4 WHERE id = $1 \
             RETURNING id, title, body, author, created_at, updated_at"
        );
    }

    #[test]
    fn select_uses_collection_order() {
        assert!(select_all_sql::<Event>().ends_with("FROM events ORDER BY event_date DESC, id DESC"));
    }
}
