//! Order lifecycle status and its display attributes
//!
//! The nine stages are strictly ordered. Every stage carries a fixed display
//! row (label, color, progress, icon); lookups by raw string never fail and
//! fall back to the `pending` row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    PickedUp,
    Washing,
    Drying,
    Folding,
    Ready,
    OutForDelivery,
    Delivered,
}

/// Bootstrap-style badge color used by the dashboards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    Secondary,
    Info,
    Primary,
    Warning,
    Success,
}

impl StatusColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusColor::Secondary => "secondary",
            StatusColor::Info => "info",
            StatusColor::Primary => "primary",
            StatusColor::Warning => "warning",
            StatusColor::Success => "success",
        }
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived display attributes of a status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusDisplay {
    pub status: OrderStatus,
    pub label: &'static str,
    pub color: StatusColor,
    /// Completion percentage, 0..=100
    pub progress: u8,
    pub icon: &'static str,
}

impl StatusDisplay {
    /// Display row for a raw status string; unknown values map to `pending`.
    pub fn for_status(status: &str) -> Self {
        status
            .parse::<OrderStatus>()
            .unwrap_or(OrderStatus::Pending)
            .display()
    }
}

impl OrderStatus {
    /// All stages in lifecycle order
    pub const ALL: [OrderStatus; 9] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::PickedUp,
        OrderStatus::Washing,
        OrderStatus::Drying,
        OrderStatus::Folding,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// Stages between pending and delivered (exclusive)
    pub const ACTIVE: [OrderStatus; 7] = [
        OrderStatus::Confirmed,
        OrderStatus::PickedUp,
        OrderStatus::Washing,
        OrderStatus::Drying,
        OrderStatus::Folding,
        OrderStatus::Ready,
        OrderStatus::OutForDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::Washing => "washing",
            OrderStatus::Drying => "drying",
            OrderStatus::Folding => "folding",
            OrderStatus::Ready => "ready",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn label(&self) -> &'static str {
        self.display().label
    }

    pub fn color(&self) -> StatusColor {
        self.display().color
    }

    pub fn progress(&self) -> u8 {
        self.display().progress
    }

    pub fn icon(&self) -> &'static str {
        self.display().icon
    }

    /// Fixed display row for this stage
    pub fn display(&self) -> StatusDisplay {
        use StatusColor::*;
        let (label, color, progress, icon) = match self {
            OrderStatus::Pending => ("Pending", Secondary, 0, "clock"),
            OrderStatus::Confirmed => ("Confirmed", Info, 10, "check-circle"),
            OrderStatus::PickedUp => ("Picked Up", Primary, 20, "truck"),
            OrderStatus::Washing => ("Washing", Primary, 40, "soap"),
            OrderStatus::Drying => ("Drying", Primary, 60, "wind"),
            OrderStatus::Folding => ("Folding", Warning, 80, "hands"),
            OrderStatus::Ready => ("Ready for Delivery", Success, 90, "check-circle"),
            OrderStatus::OutForDelivery => ("Out for Delivery", Warning, 95, "shipping-fast"),
            OrderStatus::Delivered => ("Delivered", Success, 100, "check-circle"),
        };
        StatusDisplay {
            status: *self,
            label,
            color,
            progress,
            icon,
        }
    }

    /// Next stage in the lifecycle, `None` once delivered
    pub fn next(&self) -> Option<OrderStatus> {
        let idx = Self::ALL.iter().position(|s| s == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the nine stages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}
