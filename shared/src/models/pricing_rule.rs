//! Pricing Rule Model

use crate::order::{ItemType, Priority, ServiceLevel};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPRESS_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_RUSH_MULTIPLIER: f64 = 2.0;

/// Base price for one (service level, item type) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PricingRule {
    pub id: i64,
    pub service_level: ServiceLevel,
    pub item_type: ItemType,
    pub base_price: f64,
    pub express_multiplier: f64,
    pub rush_multiplier: f64,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl PricingRule {
    /// Multiplier applied to `base_price` for a reservation priority
    pub fn multiplier(&self, priority: Priority) -> f64 {
        match priority {
            Priority::Standard => 1.0,
            Priority::Express => self.express_multiplier,
            Priority::Rush => self.rush_multiplier,
        }
    }
}

/// Create pricing rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingRuleCreate {
    pub service_level: ServiceLevel,
    pub item_type: ItemType,
    pub base_price: f64,
    pub express_multiplier: Option<f64>,
    pub rush_multiplier: Option<f64>,
}

/// Update pricing rule payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingRuleUpdate {
    pub base_price: Option<f64>,
    pub express_multiplier: Option<f64>,
    pub rush_multiplier: Option<f64>,
    pub is_active: Option<bool>,
}
