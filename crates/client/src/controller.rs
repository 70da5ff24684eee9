//! State behind one list-manage screen.
//!
//! The controller holds the rows from the last successful load and applies
//! the search filter and pagination locally. Every write goes to the source
//! and is followed by a full reload; nothing is patched into the snapshot
//! optimistically and failed writes are not retried.

use gym_core::listing::{page_of, Page, Searchable, DEFAULT_PAGE_SIZE};
use gym_core::types::DbId;

use crate::error::ClientError;
use crate::source::CollectionSource;

/// Load lifecycle of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    /// The most recent load failed. The previous snapshot is still shown.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Snapshot, filter and pagination for one collection.
pub struct ListController<T, S> {
    source: S,
    /// Entity name used in notices, e.g. "Lead".
    entity: String,
    state: LoadState,
    rows: Vec<T>,
    filter: String,
    page: usize,
    page_size: usize,
    notices: Vec<Notice>,
}

impl<T, S> ListController<T, S>
where
    T: Searchable + Clone,
    S: CollectionSource<T>,
{
    pub fn new(source: S, entity: impl Into<String>) -> Self {
        Self {
            source,
            entity: entity.into(),
            state: LoadState::Idle,
            rows: Vec::new(),
            filter: String::new(),
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            notices: Vec::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Rows from the last successful load, unfiltered.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Fetch the whole collection and replace the snapshot.
    ///
    /// On failure the previous snapshot is kept and an error notice is queued.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.source.fetch_all().await {
            Ok(rows) => {
                self.rows = rows;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::warn!(entity = %self.entity, error = %err, "Failed to load collection");
                self.state = LoadState::Error;
                self.notices
                    .push(Notice::error(format!("Failed to load {}: {err}", self.entity)));
            }
        }
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
        self.page = 0;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size;
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// The current page of the filtered snapshot.
    pub fn visible_rows(&self) -> Page<T> {
        page_of(&self.rows, &self.filter, self.page, self.page_size)
    }

    /// Submit a new record, then reload.
    pub async fn create(&mut self, input: &S::Input) -> Result<(), ClientError> {
        let result = self.source.insert(input).await.map(|_| ());
        self.after_write(result, "added").await
    }

    /// Replace the record with the given ID, then reload.
    pub async fn update(&mut self, id: DbId, input: &S::Input) -> Result<(), ClientError> {
        let result = self.source.update(id, input).await.map(|_| ());
        self.after_write(result, "updated").await
    }

    /// Delete the record with the given ID, then reload.
    pub async fn delete(&mut self, id: DbId) -> Result<(), ClientError> {
        let result = self.source.remove(id).await;
        self.after_write(result, "deleted").await
    }

    /// Take every pending notice, oldest first.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    async fn after_write(
        &mut self,
        result: Result<(), ClientError>,
        verb: &str,
    ) -> Result<(), ClientError> {
        match result {
            Ok(()) => {
                self.notices
                    .push(Notice::success(format!("{} {verb}", self.entity)));
                self.load().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(entity = %self.entity, error = %err, "Write failed");
                self.notices
                    .push(Notice::error(format!("{} not {verb}: {err}", self.entity)));
                Err(err)
            }
        }
    }
}
