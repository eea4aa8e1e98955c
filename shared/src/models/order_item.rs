//! Order Item Model

use crate::order::{ItemType, ServiceLevel};
use serde::{Deserialize, Serialize};

/// Order line; `total_price` is always `quantity × unit_price`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub item_type: ItemType,
    pub service_level: ServiceLevel,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub instructions: String,
    pub stain_notes: String,
}

/// Create item payload
///
/// A missing `unit_price` is quoted from the active pricing rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub item_type: ItemType,
    #[serde(default)]
    pub service_level: ServiceLevel,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub instructions: Option<String>,
    pub stain_notes: Option<String>,
}

/// Update item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderItemUpdate {
    pub item_type: Option<ItemType>,
    pub service_level: Option<ServiceLevel>,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    pub instructions: Option<String>,
    pub stain_notes: Option<String>,
}
