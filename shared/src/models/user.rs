//! User Model

use serde::{Deserialize, Serialize};

/// Account row; credentials live with the fronting gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_staff: bool,
    pub is_active: bool,
    pub date_joined: i64,
}

/// Customer row with order statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct UserSummary {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub user: User,
    pub total_orders: i64,
    pub total_spent: f64,
}

/// Customer list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserQuery {
    /// Matches username, email, first or last name (case-insensitive)
    pub search: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

/// Account management action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UserAction {
    Activate,
    Deactivate,
    MakeStaff,
}

/// Account management request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserActionRequest {
    pub action: UserAction,
}
