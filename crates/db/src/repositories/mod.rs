//! Repository layer.
//!
//! Single-table CRUD lives in [`crate::collection::CollectionRepo`]. The
//! repositories here cover queries that span tables, run in a transaction,
//! or must keep columns (password hashes) out of the generic path.

pub mod dashboard_repo;
pub mod member_repo;
pub mod user_repo;

pub use dashboard_repo::DashboardRepo;
pub use member_repo::MemberRepo;
pub use user_repo::UserRepo;
