//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{
    Order, OrderCreate, OrderDetail, OrderItem, OrderItemCreate, OrderItemUpdate, OrderQuery,
    OrderSummary, OrderUpdate, StatusCount,
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::order_item::NewOrderItem;
use crate::db::repository::{order, order_item, reservation};
use crate::pricing;
use crate::utils::validation::{
    MAX_INSTRUCTIONS_LEN, MAX_NOTE_LEN, MAX_SEARCH_LEN, page_bounds, validate_money,
    validate_optional_text, validate_quantity,
};
use crate::utils::{AppError, AppResult};

/// Load an order the caller may see
///
/// Another customer's order is reported as missing.
async fn load_order(state: &ServerState, user: &CurrentUser, id: i64) -> AppResult<Order> {
    let order = order::get(&state.db.pool, id).await?;
    if !user.can_access(order.user_id) {
        tracing::debug!(order_id = id, user_id = user.id, "Order outside caller scope");
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id));
    }
    Ok(order)
}

/// GET /api/orders - filtered order list, newest first
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<OrderQuery>,
) -> AppResult<Json<Vec<OrderSummary>>> {
    validate_optional_text(&query.search, "search", MAX_SEARCH_LEN)?;
    let (limit, offset) = page_bounds(query.limit, query.offset);
    let orders = order::list(&state.db.pool, &query, user.order_scope(), limit, offset).await?;
    Ok(Json(orders))
}

/// GET /api/orders/status-counts
pub async fn status_counts(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<StatusCount>>> {
    let counts = order::count_by_status(&state.db.pool, user.order_scope()).await?;
    Ok(Json(counts))
}

/// GET /api/orders/:id - order with items and status display
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let order = load_order(&state, &user, id).await?;
    let items = order_item::find_by_order(&state.db.pool, id).await?;
    Ok(Json(OrderDetail {
        display: order.display(),
        order,
        items,
    }))
}

/// POST /api/orders - create a pending order for the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<OrderCreate>,
) -> AppResult<Json<Order>> {
    validate_optional_text(&payload.special_instructions, "special_instructions", MAX_NOTE_LEN)?;

    if let Some(reservation_id) = payload.reservation_id {
        let found = reservation::find_by_id(&state.db.pool, reservation_id)
            .await?
            .filter(|r| user.can_access(r.user_id));
        if found.is_none() {
            return Err(AppError::new(ErrorCode::ReservationNotFound)
                .with_detail("reservation_id", reservation_id));
        }
    }

    let order = order::create(&state.db.pool, user.id, payload, shared::util::now_millis()).await?;
    tracing::info!(
        order_id = order.id,
        order_number = order.order_number.as_deref().unwrap_or_default(),
        user_id = user.id,
        "Order created"
    );
    Ok(Json(order))
}

/// PUT /api/orders/:id - special instructions and estimated completion
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    validate_optional_text(&payload.special_instructions, "special_instructions", MAX_NOTE_LEN)?;
    load_order(&state, &user, id).await?;
    let order = order::update(&state.db.pool, id, payload, shared::util::now_millis()).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/:id - staff only; items go with the order
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !user.is_staff() {
        return Err(AppError::staff_required());
    }
    let deleted = order::delete(&state.db.pool, id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::OrderNotFound).with_detail("id", id));
    }
    tracing::info!(order_id = id, staff_id = user.id, "Order deleted");
    Ok(Json(true))
}

// ========== Items ==========

/// GET /api/orders/:id/items
pub async fn list_items(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<OrderItem>>> {
    load_order(&state, &user, id).await?;
    let items = order_item::find_by_order(&state.db.pool, id).await?;
    Ok(Json(items))
}

/// POST /api/orders/:id/items
///
/// Without `unit_price` the active pricing rule quotes it.
pub async fn create_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<OrderItemCreate>,
) -> AppResult<Json<OrderItem>> {
    let quantity = payload.quantity.unwrap_or(1);
    validate_quantity(quantity)?;
    validate_optional_text(&payload.instructions, "instructions", MAX_INSTRUCTIONS_LEN)?;
    validate_optional_text(&payload.stain_notes, "stain_notes", MAX_NOTE_LEN)?;

    let order = load_order(&state, &user, id).await?;
    let unit_price = match payload.unit_price {
        Some(price) => {
            validate_money(price, "unit_price")?;
            price
        }
        None => {
            pricing::quote_unit_price(
                &state.db.pool,
                &order,
                payload.service_level,
                payload.item_type,
            )
            .await?
        }
    };

    let item = order_item::create(
        &state.db.pool,
        id,
        NewOrderItem {
            item_type: payload.item_type,
            service_level: payload.service_level,
            quantity,
            unit_price,
            instructions: payload.instructions.unwrap_or_default(),
            stain_notes: payload.stain_notes.unwrap_or_default(),
        },
    )
    .await?;
    Ok(Json(item))
}

/// PUT /api/orders/:id/items/:item_id
pub async fn update_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((id, item_id)): Path<(i64, i64)>,
    Json(payload): Json<OrderItemUpdate>,
) -> AppResult<Json<OrderItem>> {
    if let Some(quantity) = payload.quantity {
        validate_quantity(quantity)?;
    }
    if let Some(price) = payload.unit_price {
        validate_money(price, "unit_price")?;
    }
    validate_optional_text(&payload.instructions, "instructions", MAX_INSTRUCTIONS_LEN)?;
    validate_optional_text(&payload.stain_notes, "stain_notes", MAX_NOTE_LEN)?;

    load_order(&state, &user, id).await?;
    let item = order_item::update(&state.db.pool, id, item_id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/orders/:id/items/:item_id - the order is kept
pub async fn delete_item(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path((id, item_id)): Path<(i64, i64)>,
) -> AppResult<Json<bool>> {
    load_order(&state, &user, id).await?;
    order_item::delete(&state.db.pool, id, item_id).await?;
    Ok(Json(true))
}
