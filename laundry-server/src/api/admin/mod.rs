//! Admin API Module
//!
//! Staff back office. Every route sits behind [`require_staff`]; each
//! mutating call appends to the admin log.

mod handler;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::auth::require_staff;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/dashboard", get(handler::dashboard))
        .route("/orders/{id}/status", post(handler::update_order_status))
        .route(
            "/pricing-rules",
            get(handler::list_pricing_rules).post(handler::create_pricing_rule),
        )
        .route("/pricing-rules/{id}", put(handler::update_pricing_rule))
        .route("/users", get(handler::list_users))
        .route("/users/{id}/action", post(handler::user_action))
        .route("/logs", get(handler::list_logs))
        .route("/progress", post(handler::run_progression))
        .route_layer(middleware::from_fn(require_staff))
}
