//! Unified error codes for the laundry service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Pricing errors
//! - 6xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// Caller identity missing or unknown
    NotAuthenticated = 1001,
    /// Account is disabled
    AccountDisabled = 1007,

    // ==================== 2xxx: Permission ====================
    /// Staff privileges required
    StaffRequired = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Status value is not one of the lifecycle stages
    InvalidOrderStatus = 4002,
    /// Order number already assigned to another order
    OrderNumberConflict = 4003,
    /// Order item not found
    OrderItemNotFound = 4006,
    /// Quantity is negative or above the per-line maximum
    InvalidQuantity = 4010,
    /// Price is out of range or has more than two decimals
    InvalidPrice = 4011,
    /// Reservation not found
    ReservationNotFound = 4101,

    // ==================== 5xxx: Pricing ====================
    /// Pricing rule not found
    PricingRuleNotFound = 5001,
    /// Pricing rule for this service/item pair already exists
    PricingRuleExists = 5002,
    /// No price given and no active rule to quote from
    NoApplicablePrice = 5003,

    // ==================== 6xxx: User ====================
    /// User not found
    UserNotFound = 6001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::AccountDisabled => "Account is disabled",

            // Permission
            ErrorCode::StaffRequired => "Staff privileges are required",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::InvalidOrderStatus => "Invalid status",
            ErrorCode::OrderNumberConflict => "Order number already in use",
            ErrorCode::OrderItemNotFound => "Order item not found",
            ErrorCode::InvalidQuantity => "Invalid quantity",
            ErrorCode::InvalidPrice => "Invalid price",
            ErrorCode::ReservationNotFound => "Reservation not found",

            // Pricing
            ErrorCode::PricingRuleNotFound => "Pricing rule not found",
            ErrorCode::PricingRuleExists => "Pricing rule already exists",
            ErrorCode::NoApplicablePrice => "No active pricing rule for this item",

            // User
            ErrorCode::UserNotFound => "User not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1007 => Ok(ErrorCode::AccountDisabled),

            // Permission
            2002 => Ok(ErrorCode::StaffRequired),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::InvalidOrderStatus),
            4003 => Ok(ErrorCode::OrderNumberConflict),
            4006 => Ok(ErrorCode::OrderItemNotFound),
            4010 => Ok(ErrorCode::InvalidQuantity),
            4011 => Ok(ErrorCode::InvalidPrice),
            4101 => Ok(ErrorCode::ReservationNotFound),

            // Pricing
            5001 => Ok(ErrorCode::PricingRuleNotFound),
            5002 => Ok(ErrorCode::PricingRuleExists),
            5003 => Ok(ErrorCode::NoApplicablePrice),

            // User
            6001 => Ok(ErrorCode::UserNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
