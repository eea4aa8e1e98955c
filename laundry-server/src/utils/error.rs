//! Error conversions
//!
//! Re-exports the shared error system and maps repository and domain errors
//! onto it.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::OrderNotFound(id) => AppError::new(ErrorCode::OrderNotFound)
                .with_detail("order_id", id),
            RepoError::ItemNotFound(id) => AppError::new(ErrorCode::OrderItemNotFound)
                .with_detail("item_id", id),
            RepoError::UserNotFound(id) => {
                AppError::new(ErrorCode::UserNotFound).with_detail("user_id", id)
            }
            RepoError::PricingRuleNotFound(id) => {
                AppError::new(ErrorCode::PricingRuleNotFound).with_detail("rule_id", id)
            }
            RepoError::ReservationNotFound(id) => {
                AppError::new(ErrorCode::ReservationNotFound).with_detail("reservation_id", id)
            }
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            RepoError::OrderNumberTaken(number) => {
                AppError::new(ErrorCode::OrderNumberConflict).with_detail("order_number", number)
            }
            RepoError::PricingRuleExists(msg) => {
                AppError::with_message(ErrorCode::PricingRuleExists, msg)
            }
            RepoError::Money(err) => err.into(),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::OrderNotFound(4).into();
        assert_eq!(err.code, ErrorCode::OrderNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = RepoError::Duplicate("users.username".into()).into();
        assert_eq!(err.code, ErrorCode::AlreadyExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = RepoError::OrderNumberTaken("LP00010101".into()).into();
        assert_eq!(err.code, ErrorCode::OrderNumberConflict);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError =
            RepoError::PricingRuleExists("Wash & Fold / Shirt".into()).into();
        assert_eq!(err.code, ErrorCode::PricingRuleExists);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);

        let err: AppError = RepoError::Money(shared::order::MoneyError::Overflow).into();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);

        let err: AppError = RepoError::Database("disk I/O error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "disk I/O error");
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: AppError = "shipped".parse::<shared::order::OrderStatus>().unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidOrderStatus);

        let err: AppError = shared::order::validate_price(-1.0).unwrap_err().into();
        assert_eq!(err.code, ErrorCode::InvalidPrice);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }
}
