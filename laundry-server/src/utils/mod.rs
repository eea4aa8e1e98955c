//! Utilities
//!
//! - [`AppError`] / [`ApiResponse`] (from `shared::error`)
//! - logging setup
//! - request validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
