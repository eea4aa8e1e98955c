//! Order lifecycle domain
//!
//! - [`OrderStatus`]: the nine lifecycle stages and their display rows
//! - [`order_number`]: order number formatting
//! - [`ItemType`], [`ServiceLevel`], [`Priority`]: line and reservation kinds
//! - [`money`]: decimal-backed price arithmetic

pub mod item;
pub mod money;
pub mod number;
pub mod status;

// Re-exports
pub use item::{ItemType, Priority, ServiceLevel};
pub use money::{MAX_QUANTITY, MoneyError, line_total, validate_multiplier, validate_price};
pub use number::{ORDER_NUMBER_PREFIX, order_number};
pub use status::{OrderStatus, StatusColor, StatusDisplay, UnknownStatus};
