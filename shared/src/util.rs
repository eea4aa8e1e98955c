/// Current UTC timestamp (milliseconds)
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// UTC calendar date of a Unix millisecond timestamp
pub fn utc_date(millis: i64) -> chrono::NaiveDate {
    chrono::DateTime::from_timestamp_millis(millis)
        .unwrap_or_default()
        .date_naive()
}

/// Minutes expressed in milliseconds
pub const fn minutes_to_millis(minutes: i64) -> i64 {
    minutes * 60 * 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_date() {
        // 2024-03-05T12:00:00Z
        let date = utc_date(1_709_640_000_000);
        assert_eq!(date, chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_minutes_to_millis() {
        assert_eq!(minutes_to_millis(20), 1_200_000);
    }
}
