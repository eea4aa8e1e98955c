//! Reservation Model (read-only)

use crate::order::Priority;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

/// Pickup/delivery booking an order may belong to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub user_id: i64,
    pub pickup_at: i64,
    pub delivery_at: i64,
    pub address: String,
    pub phone_number: String,
    pub notes: String,
    pub priority: Priority,
    pub status: ReservationStatus,
    pub estimated_cost: Option<f64>,
    pub final_cost: Option<f64>,
    pub created_at: i64,
    pub updated_at: i64,
}
