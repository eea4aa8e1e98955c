//! Repository Module
//!
//! Free-function CRUD over `SqlitePool`, one module per table.

pub mod admin_log;
pub mod order;
pub mod order_item;
pub mod pricing_rule;
pub mod reservation;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Order item {0} not found")]
    ItemNotFound(i64),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Pricing rule {0} not found")]
    PricingRuleNotFound(i64),

    #[error("Reservation {0} not found")]
    ReservationNotFound(i64),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Order number {0} is already taken")]
    OrderNumberTaken(String),

    #[error("Pricing rule already exists: {0}")]
    PricingRuleExists(String),

    #[error("Amount error: {0}")]
    Money(#[from] shared::order::MoneyError),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err
            && db_err.is_unique_violation()
        {
            return RepoError::Duplicate(db_err.message().to_string());
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Escape `%`, `_` and `\` for a `LIKE ... ESCAPE '\'` pattern and wrap in `%`
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.trim().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
