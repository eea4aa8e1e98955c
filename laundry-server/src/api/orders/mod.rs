//! Order API Module
//!
//! Customers see and edit their own orders; staff see all of them. Deleting
//! an order is staff only.

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/status-counts", get(handler::status_counts))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route(
            "/{id}/items",
            get(handler::list_items).post(handler::create_item),
        )
        .route(
            "/{id}/items/{item_id}",
            put(handler::update_item).delete(handler::delete_item),
        )
}
