//! Domain model structs and DTOs.
//!
//! Each collection submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` save DTO used for both create and replace
//! - Its [`Searchable`](gym_core::listing::Searchable) fields and
//!   [`Collection`](crate::collection::Collection) impl

pub mod attendance;
pub mod booking;
pub mod dashboard;
pub mod diet;
pub mod event;
pub mod expense;
pub mod lead;
pub mod member;
pub mod offer;
pub mod post;
pub mod renewal;
pub mod service;
pub mod staff;
pub mod transaction;
pub mod user;
pub mod workout;
