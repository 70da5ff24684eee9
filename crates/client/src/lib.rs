//! HTTP client and list-screen state for the gym back office.
//!
//! [`api::GymClient`] talks to the REST API. [`controller::ListController`]
//! holds the state behind one collection screen: the last loaded snapshot,
//! the search filter, the current page and any pending notices.

pub mod api;
pub mod controller;
pub mod error;
pub mod source;

pub use api::{CollectionApi, GymClient};
pub use controller::{ListController, LoadState, Notice, NoticeLevel};
pub use error::ClientError;
pub use source::CollectionSource;
