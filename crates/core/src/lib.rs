//! Pure domain logic for the gym back-office.
//!
//! Nothing in this crate performs I/O; the database and HTTP layers depend
//! on it, never the other way round.

pub mod billing;
pub mod error;
pub mod listing;
pub mod membership;
pub mod roles;
pub mod types;
