//! Well-known role name constants.
//!
//! These must match the `ck_users_role` check constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_STAFF: &str = "staff";

/// Every role an admin user may be assigned.
pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_STAFF];

/// Check whether a role name is one of [`VALID_ROLES`].
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}
