//! Shared types for the laundry service
//!
//! Order lifecycle domain, data models and the unified error/response types
//! used by the server and its API clients.

pub mod error;
pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};
