//! Dashboard statistics

use serde::{Deserialize, Serialize};

use super::{OrderSummary, StatusCount};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_orders: i64,
    pub pending_orders: i64,
    pub active_orders: i64,
    pub completed_orders: i64,
    /// Customers only (staff excluded)
    pub total_users: i64,
    pub total_reservations: i64,
    /// Sum of `total_cost` over delivered orders
    pub total_revenue: f64,
    pub status_distribution: Vec<StatusCount>,
    pub recent_orders: Vec<OrderSummary>,
}
