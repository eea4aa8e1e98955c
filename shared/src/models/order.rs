//! Order Model

use crate::order::{OrderStatus, StatusColor, StatusDisplay};
use serde::{Deserialize, Serialize};

use super::OrderItem;

/// Laundry order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub reservation_id: Option<i64>,
    /// `None` only between insert and number assignment
    pub order_number: Option<String>,
    pub status: OrderStatus,
    pub total_items: i64,
    pub total_cost: f64,
    pub special_instructions: String,
    /// Unix millis
    pub estimated_completion: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    pub fn display(&self) -> StatusDisplay {
        self.status.display()
    }
}

/// Create order payload (owner comes from the caller)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub reservation_id: Option<i64>,
    pub special_instructions: Option<String>,
    pub estimated_completion: Option<i64>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub special_instructions: Option<String>,
    pub estimated_completion: Option<i64>,
}

/// Order row joined with its owner, used by list views
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderSummary {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub order: Order,
    pub username: String,
    pub email: String,
}

/// Order with its items and status display
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    pub display: StatusDisplay,
    pub items: Vec<OrderItem>,
}

/// Order list filters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderQuery {
    pub status: Option<OrderStatus>,
    /// Matches order number, username or email (case-insensitive)
    pub search: Option<String>,
    /// Inclusive lower bound on `created_at` (Unix millis)
    pub date_from: Option<i64>,
    /// Inclusive upper bound on `created_at` (Unix millis)
    pub date_to: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// Number of orders in one status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: i64,
}

/// Manual status change request; the status is checked by name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Outcome of a manual status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdateResult {
    pub order_id: i64,
    pub order_number: Option<String>,
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
    pub label: String,
    pub color: StatusColor,
    pub progress: u8,
}
