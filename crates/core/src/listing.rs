//! Free-text filtering and pagination over a loaded snapshot of rows.
//!
//! Every collection screen applies the same two steps to the rows it last
//! loaded: keep rows whose searchable fields contain the query, then take
//! one page of the result. The functions here are deterministic over their
//! inputs so the same snapshot, query and page always yield the same rows.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of rows per page accepted from a request.
pub const MAX_PAGE_SIZE: usize = 500;

// ---------------------------------------------------------------------------
// Searchable rows
// ---------------------------------------------------------------------------

/// A row that exposes a fixed subset of its string fields to free-text search.
pub trait Searchable {
    /// The field values the filter inspects. Absent optional fields are skipped.
    fn search_fields(&self) -> Vec<&str>;
}

/// Normalize a user query for matching. Returns `None` when the query is blank.
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Whether any searchable field of `row` contains the already-normalized needle.
pub fn row_matches<T: Searchable>(row: &T, needle: &str) -> bool {
    row.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep rows where any searchable field contains `query`, ignoring case.
///
/// A blank query keeps every row. Input order is preserved.
pub fn filter_rows<'a, T: Searchable>(rows: &'a [T], query: &str) -> Vec<&'a T> {
    match normalize_query(query) {
        None => rows.iter().collect(),
        Some(needle) => rows.iter().filter(|row| row_matches(*row, &needle)).collect(),
    }
}

/// The contiguous slice `[page * page_size, page * page_size + page_size)`.
///
/// Pages past the end, and a page size of zero, are empty.
pub fn paginate<T>(rows: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_mul(page_size).min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

/// Clamp a requested page size to `1..=MAX_PAGE_SIZE`, defaulting when absent.
pub fn clamp_page_size(page_size: Option<usize>) -> usize {
    page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE)
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// One page of filtered rows plus the size of the full filtered result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of rows that matched the filter, across all pages.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    /// Number of pages needed for `total` rows.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total.div_ceil(self.page_size)
        }
    }
}

/// Filter `rows` by `query` and return the requested page.
pub fn page_of<T: Searchable + Clone>(
    rows: &[T],
    query: &str,
    page: usize,
    page_size: usize,
) -> Page<T> {
    let filtered = filter_rows(rows, query);
    let items = paginate(&filtered, page, page_size)
        .iter()
        .map(|row| (*row).clone())
        .collect();

    Page {
        items,
        total: filtered.len(),
        page,
        page_size,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
