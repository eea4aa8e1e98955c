//! Garment kinds and service levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of garment on an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum ItemType {
    Shirt,
    Pants,
    Dress,
    Jacket,
    Bedding,
    Towel,
    Delicate,
    Other,
}

impl ItemType {
    pub const ALL: [ItemType; 8] = [
        ItemType::Shirt,
        ItemType::Pants,
        ItemType::Dress,
        ItemType::Jacket,
        ItemType::Bedding,
        ItemType::Towel,
        ItemType::Delicate,
        ItemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Shirt => "shirt",
            ItemType::Pants => "pants",
            ItemType::Dress => "dress",
            ItemType::Jacket => "jacket",
            ItemType::Bedding => "bedding",
            ItemType::Towel => "towel",
            ItemType::Delicate => "delicate",
            ItemType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Shirt => "Shirt",
            ItemType::Pants => "Pants",
            ItemType::Dress => "Dress",
            ItemType::Jacket => "Jacket",
            ItemType::Bedding => "Bedding",
            ItemType::Towel => "Towel",
            ItemType::Delicate => "Delicate Items",
            ItemType::Other => "Other",
        }
    }
}

/// Treatment applied to an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum ServiceLevel {
    #[default]
    WashFold,
    DryClean,
    PressOnly,
    StainTreatment,
}

impl ServiceLevel {
    pub const ALL: [ServiceLevel; 4] = [
        ServiceLevel::WashFold,
        ServiceLevel::DryClean,
        ServiceLevel::PressOnly,
        ServiceLevel::StainTreatment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLevel::WashFold => "wash_fold",
            ServiceLevel::DryClean => "dry_clean",
            ServiceLevel::PressOnly => "press_only",
            ServiceLevel::StainTreatment => "stain_treatment",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceLevel::WashFold => "Wash & Fold",
            ServiceLevel::DryClean => "Dry Clean",
            ServiceLevel::PressOnly => "Press Only",
            ServiceLevel::StainTreatment => "Stain Treatment",
        }
    }
}

/// Reservation urgency, selects the pricing multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "TEXT", rename_all = "snake_case"))]
pub enum Priority {
    #[default]
    Standard,
    Express,
    Rush,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Standard => "standard",
            Priority::Express => "express",
            Priority::Rush => "rush",
        }
    }
}

macro_rules! impl_text_enum {
    ($ty:ty, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                serde_json::from_value(serde_json::Value::String(s.to_string()))
                    .map_err(|_| format!("unknown {}: {s}", $what))
            }
        }
    };
}

impl_text_enum!(ItemType, "item type");
impl_text_enum!(ServiceLevel, "service level");
impl_text_enum!(Priority, "priority");
