//! First-run admin account.
//!
//! A fresh database has no users, so nobody could log in to create one.
//! On startup, if no active admin exists and `BOOTSTRAP_ADMIN_USERNAME` /
//! `BOOTSTRAP_ADMIN_PASSWORD` are set, an admin is created from them.

use gym_core::error::CoreError;
use gym_core::roles::ROLE_ADMIN;
use gym_db::models::user::{CreateUser, User};
use gym_db::repositories::UserRepo;
use gym_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials for the first admin account.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl BootstrapAdmin {
    /// Read `BOOTSTRAP_ADMIN_USERNAME`, `BOOTSTRAP_ADMIN_PASSWORD` and
    /// optionally `BOOTSTRAP_ADMIN_EMAIL`. Returns `None` unless both
    /// username and password are set.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok()?;
        let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok()?;
        let email = std::env::var("BOOTSTRAP_ADMIN_EMAIL")
            .unwrap_or_else(|_| format!("{username}@localhost"));
        Some(Self {
            username,
            email,
            password,
        })
    }
}

/// Create the bootstrap admin unless an active admin already exists.
///
/// Returns the created user, or `None` when nothing was done.
pub async fn ensure_admin(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<Option<User>> {
    if UserRepo::count_active_with_role(pool, ROLE_ADMIN).await? > 0 {
        return Ok(None);
    }

    validate_password_strength(&admin.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;
    Ok(Some(user))
}
