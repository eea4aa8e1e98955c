//! Order number formatting

use chrono::{Datelike, NaiveDate};

/// Prefix carried by every order number
pub const ORDER_NUMBER_PREFIX: &str = "LP";

/// Format the order number for a persisted order id.
///
/// `"LP"` + id zero-padded to at least 4 digits + two-digit month + two-digit
/// day. Ids above 9999 keep all their digits.
pub fn order_number(id: i64, date: NaiveDate) -> String {
    format!(
        "{ORDER_NUMBER_PREFIX}{id:04}{:02}{:02}",
        date.month(),
        date.day()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_order_number_format() {
        assert_eq!(order_number(7, date(3, 5)), "LP00070305");
        assert_eq!(order_number(1234, date(12, 31)), "LP12341231");
    }

    #[test]
    fn test_order_number_wide_id() {
        assert_eq!(order_number(123456, date(1, 9)), "LP1234560109");
    }
}
