//! Data models
//!
//! Shared between laundry-server and its API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps Unix millis.

pub mod admin_log;
pub mod dashboard;
pub mod order;
pub mod order_item;
pub mod pricing_rule;
pub mod reservation;
pub mod user;

// Re-exports
pub use admin_log::*;
pub use dashboard::*;
pub use order::*;
pub use order_item::*;
pub use pricing_rule::*;
pub use reservation::*;
pub use user::*;
