//! Admin Log Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of staff action recorded in the admin log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum AdminAction {
    OrderUpdate,
    PriceChange,
    UserAction,
    SettingsChange,
    Login,
    Logout,
}

impl AdminAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminAction::OrderUpdate => "order_update",
            AdminAction::PriceChange => "price_change",
            AdminAction::UserAction => "user_action",
            AdminAction::SettingsChange => "settings_change",
            AdminAction::Login => "login",
            AdminAction::Logout => "logout",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminAction::OrderUpdate => "Order Status Update",
            AdminAction::PriceChange => "Price Change",
            AdminAction::UserAction => "User Management",
            AdminAction::SettingsChange => "Settings Change",
            AdminAction::Login => "Admin Login",
            AdminAction::Logout => "Admin Logout",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin log row joined with the acting user's name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminLog {
    pub id: i64,
    pub admin_user_id: i64,
    pub admin_username: String,
    pub action_type: AdminAction,
    pub description: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub ip_address: Option<String>,
    pub created_at: i64,
}

/// Admin log filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdminLogQuery {
    pub action: Option<AdminAction>,
    /// Substring of the acting user's username
    pub admin: Option<String>,
    #[serde(default)]
    pub offset: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}
