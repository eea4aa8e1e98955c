//! HTTP API
//!
//! - [`health`] - liveness and database check (public)
//! - [`orders`] - orders and order items (customer scope or staff)
//! - [`admin`] - staff back office

pub mod admin;
pub mod health;
pub mod orders;

pub use crate::utils::{AppError, AppResult};
