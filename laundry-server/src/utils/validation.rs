//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use crate::utils::AppError;
use shared::error::ErrorCode;
use shared::order::{MAX_QUANTITY, validate_price};
use shared::order::validate_multiplier as check_multiplier;

/// Item instructions (one line on the ticket)
pub const MAX_INSTRUCTIONS_LEN: usize = 255;

/// Notes: special instructions, stain notes
pub const MAX_NOTE_LEN: usize = 2000;

/// Search terms in list filters
pub const MAX_SEARCH_LEN: usize = 100;

/// Page size cap for list endpoints
pub const MAX_PAGE_SIZE: i64 = 200;

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Quantities are integers in `0..=MAX_QUANTITY`
pub fn validate_quantity(quantity: i64) -> Result<(), AppError> {
    if quantity < 0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("Quantity must not be negative: {quantity}"),
        )
        .with_detail("field", "quantity"));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::InvalidQuantity,
            format!("Quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"),
        )
        .with_detail("field", "quantity"));
    }
    Ok(())
}

/// Money amounts: non-negative, bounded, at most 2 decimal places
pub fn validate_money(value: f64, field: &str) -> Result<(), AppError> {
    validate_price(value).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidPrice, format!("{field}: {e}"))
            .with_detail("field", field)
    })
}

/// Multipliers are positive, bounded, at most 2 decimal places
pub fn validate_multiplier(value: f64, field: &str) -> Result<(), AppError> {
    if value == 0.0 {
        return Err(
            AppError::validation(format!("{field} must be a positive number"))
                .with_detail("field", field),
        );
    }
    check_multiplier(value).map_err(|e| {
        AppError::validation(format!("{field}: {e}")).with_detail("field", field)
    })
}

/// Clamp pagination to sane bounds
pub fn page_bounds(limit: i64, offset: i64) -> (i64, i64) {
    (limit.clamp(1, MAX_PAGE_SIZE), offset.max(0))
}
