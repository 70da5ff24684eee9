pub mod admin;
pub mod auth;
pub mod billing;
pub mod collection;
pub mod dashboard;
pub mod membership;
