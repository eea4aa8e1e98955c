//! Caller identity
//!
//! The fronting gateway authenticates users and forwards the account id in
//! the `X-User-Id` header. This module resolves that id to an active account
//! and gates staff-only routes:
//! - [`CurrentUser`] - resolved caller
//! - [`require_user`] - identity middleware
//! - [`require_staff`] - staff check middleware

pub mod extractor;
pub mod middleware;

pub use middleware::{require_staff, require_user};

use http::HeaderMap;
use shared::error::ErrorCode;
use shared::models::User;
use sqlx::SqlitePool;

use crate::db::repository::user;
use crate::security_log;
use crate::utils::AppError;

/// Header carrying the authenticated account id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolved caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub is_staff: bool,
}

impl CurrentUser {
    pub fn is_staff(&self) -> bool {
        self.is_staff
    }

    /// Owner filter for order queries: staff see everything
    pub fn order_scope(&self) -> Option<i64> {
        (!self.is_staff).then_some(self.id)
    }

    /// Staff may touch any order, customers only their own
    pub fn can_access(&self, owner_id: i64) -> bool {
        self.is_staff || self.id == owner_id
    }
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            is_staff: user.is_staff,
        }
    }
}

/// Resolve the caller from request headers
pub async fn resolve(pool: &SqlitePool, headers: &HeaderMap) -> Result<CurrentUser, AppError> {
    let Some(raw) = headers.get(USER_ID_HEADER) else {
        security_log!("WARN", "identity_missing");
        return Err(AppError::not_authenticated());
    };
    let id = raw
        .to_str()
        .ok()
        .and_then(|v| v.trim().parse::<i64>().ok())
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::NotAuthenticated, "Malformed user id header")
        })?;

    let user = user::find_by_id(pool, id).await?.ok_or_else(|| {
        security_log!("WARN", "identity_unknown", user_id = id);
        AppError::not_authenticated()
    })?;

    if !user.is_active {
        security_log!("WARN", "account_disabled", user_id = id);
        return Err(AppError::new(ErrorCode::AccountDisabled));
    }
    Ok(user.into())
}
