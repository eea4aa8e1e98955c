//! Money arithmetic
//!
//! Amounts are stored as `f64` (SQLite REAL) and computed with `Decimal`,
//! rounded to cents (half away from zero) on the way back out. Inputs are
//! bounded so every product and sum fits in a `Decimal`; the checked helpers
//! still report overflow instead of panicking.

use rust_decimal::prelude::*;

/// Decimal places kept for monetary values
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum unit or base price (1,000,000.00)
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum quantity per order line
pub const MAX_QUANTITY: i64 = 9999;

/// Maximum urgency multiplier (4 digits, 2 decimals)
pub const MAX_MULTIPLIER: f64 = 99.99;

/// Convert f64 to Decimal, failing on NaN, infinity or out-of-range values
#[inline]
pub fn to_decimal(value: f64) -> Result<Decimal, MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::NotFinite);
    }
    Decimal::from_f64(value).ok_or(MoneyError::Overflow)
}

/// Round to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> Result<f64, MoneyError> {
    round_money(value).to_f64().ok_or(MoneyError::Overflow)
}

/// Product of two amounts, rounded to cents
pub fn mul_money(a: f64, b: f64) -> Result<f64, MoneyError> {
    let product = to_decimal(a)?
        .checked_mul(to_decimal(b)?)
        .ok_or(MoneyError::Overflow)?;
    to_f64(product)
}

/// Line total: `unit_price × quantity`, rounded to cents
pub fn line_total(quantity: i64, unit_price: f64) -> Result<f64, MoneyError> {
    let product = to_decimal(unit_price)?
        .checked_mul(Decimal::from(quantity))
        .ok_or(MoneyError::Overflow)?;
    to_f64(product)
}

/// Sum of amounts, rounded to cents
pub fn sum_money<I: IntoIterator<Item = f64>>(amounts: I) -> Result<f64, MoneyError> {
    let total = amounts.into_iter().try_fold(Decimal::ZERO, |acc, amount| {
        acc.checked_add(to_decimal(amount)?).ok_or(MoneyError::Overflow)
    })?;
    to_f64(total)
}

/// Reasons a monetary amount is rejected
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MoneyError {
    #[error("amount must be a finite number")]
    NotFinite,
    #[error("amount must not be negative")]
    Negative,
    #[error("amount must have at most 2 decimal places")]
    TooPrecise,
    #[error("amount exceeds the maximum of {0}")]
    TooLarge(f64),
    #[error("amount is out of range")]
    Overflow,
}

/// Non-negative, at most `max`, at most 2 decimal places
fn validate_bounded(value: f64, max: f64) -> Result<(), MoneyError> {
    if !value.is_finite() {
        return Err(MoneyError::NotFinite);
    }
    if value < 0.0 {
        return Err(MoneyError::Negative);
    }
    if value > max {
        return Err(MoneyError::TooLarge(max));
    }
    if to_decimal(value)?.normalize().scale() > DECIMAL_PLACES {
        return Err(MoneyError::TooPrecise);
    }
    Ok(())
}

/// Check that a price is within `0..=MAX_PRICE` with at most 2 decimal places
pub fn validate_price(value: f64) -> Result<(), MoneyError> {
    validate_bounded(value, MAX_PRICE)
}

/// Check that a multiplier is within `0..=MAX_MULTIPLIER` with at most 2 decimal places
pub fn validate_multiplier(value: f64) -> Result<(), MoneyError> {
    validate_bounded(value, MAX_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total_exact() {
        assert_eq!(line_total(3, 2.50), Ok(7.50));
        assert_eq!(line_total(3, 0.10), Ok(0.30));
        assert_eq!(line_total(7, 19.99), Ok(139.93));
        assert_eq!(line_total(0, 12.00), Ok(0.0));
        assert_eq!(line_total(MAX_QUANTITY, MAX_PRICE), Ok(9_999_000_000.0));
    }

    #[test]
    fn test_line_total_has_no_drift() {
        let unit = 0.07;
        let totals: Vec<f64> = (0..100).map(|_| line_total(13, unit).unwrap()).collect();
        assert!(totals.iter().all(|t| *t == 0.91));
    }

    #[test]
    fn test_out_of_range_amounts_never_become_zero() {
        assert_eq!(line_total(2, 1e30), Err(MoneyError::Overflow));
        assert_eq!(line_total(i64::MAX, 1e12), Err(MoneyError::Overflow));
        assert_eq!(line_total(1, f64::NAN), Err(MoneyError::NotFinite));
        assert_eq!(mul_money(1e20, 1e20), Err(MoneyError::Overflow));
        assert_eq!(sum_money([7.9e28, 7.9e28]), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_sum_money() {
        assert_eq!(sum_money([0.1, 0.2]), Ok(0.3));
        assert_eq!(sum_money(Vec::<f64>::new()), Ok(0.0));
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(0.0), Ok(()));
        assert_eq!(validate_price(4.99), Ok(()));
        assert_eq!(validate_price(10.5), Ok(()));
        assert_eq!(validate_price(MAX_PRICE), Ok(()));
        assert_eq!(validate_price(-0.01), Err(MoneyError::Negative));
        assert_eq!(validate_price(1.234), Err(MoneyError::TooPrecise));
        assert_eq!(validate_price(f64::NAN), Err(MoneyError::NotFinite));
        assert_eq!(validate_price(f64::INFINITY), Err(MoneyError::NotFinite));
        assert_eq!(validate_price(1e30), Err(MoneyError::TooLarge(MAX_PRICE)));
        assert_eq!(
            validate_price(1_000_000.01),
            Err(MoneyError::TooLarge(MAX_PRICE))
        );
    }

    #[test]
    fn test_validate_multiplier() {
        assert_eq!(validate_multiplier(1.5), Ok(()));
        assert_eq!(validate_multiplier(MAX_MULTIPLIER), Ok(()));
        assert_eq!(
            validate_multiplier(100.0),
            Err(MoneyError::TooLarge(MAX_MULTIPLIER))
        );
        assert_eq!(
            validate_multiplier(8e28),
            Err(MoneyError::TooLarge(MAX_MULTIPLIER))
        );
        assert_eq!(validate_multiplier(1.255), Err(MoneyError::TooPrecise));
        assert_eq!(validate_multiplier(-1.0), Err(MoneyError::Negative));
    }
}
