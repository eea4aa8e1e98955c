//! Admin API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::ErrorCode;
use shared::models::{
    AdminAction, AdminLog, AdminLogQuery, DashboardStats, PricingRule, PricingRuleCreate,
    PricingRuleUpdate, StatusCount, StatusUpdate, StatusUpdateResult, UserAction,
    UserActionRequest, UserQuery, UserSummary,
};
use shared::order::{OrderStatus, money::sum_money};

use crate::audit::{self, AdminLogEntry, ClientIp};
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{admin_log, order, pricing_rule, reservation, user};
use crate::orders::{ProgressionReport, progress_orders};
use crate::utils::validation::{
    MAX_SEARCH_LEN, page_bounds, validate_money, validate_multiplier, validate_optional_text,
};
use crate::utils::{AppError, AppResult};

const RECENT_ORDERS: i64 = 10;

/// Pending, active and completed totals from a status distribution
fn split_counts(counts: &[StatusCount]) -> (i64, i64, i64) {
    counts.iter().fold((0, 0, 0), |(pending, active, done), c| {
        match c.status {
            OrderStatus::Pending => (pending + c.count, active, done),
            OrderStatus::Delivered => (pending, active, done + c.count),
            _ => (pending, active + c.count, done),
        }
    })
}

/// GET /api/admin/dashboard
pub async fn dashboard(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let pool = &state.db.pool;

    let status_distribution = order::count_by_status(pool, None).await?;
    let (pending_orders, active_orders, completed_orders) = split_counts(&status_distribution);
    let total_revenue = sum_money(order::delivered_totals(pool).await?)?;

    Ok(Json(DashboardStats {
        total_orders: order::count_all(pool).await?,
        pending_orders,
        active_orders,
        completed_orders,
        total_users: user::count_customers(pool).await?,
        total_reservations: reservation::count_all(pool).await?,
        total_revenue,
        status_distribution,
        recent_orders: order::recent(pool, RECENT_ORDERS).await?,
    }))
}

/// POST /api/admin/orders/:id/status - manual status change
pub async fn update_order_status(
    State(state): State<ServerState>,
    admin: CurrentUser,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<StatusUpdateResult>> {
    let new_status: OrderStatus = payload.status.parse()?;
    let current = order::get(&state.db.pool, id).await?;
    let old_status = current.status;

    let updated =
        order::set_status(&state.db.pool, id, new_status, shared::util::now_millis()).await?;
    let number = updated
        .order_number
        .clone()
        .unwrap_or_else(|| updated.id.to_string());

    audit::record(
        &state.db.pool,
        AdminLogEntry::new(
            admin.id,
            AdminAction::OrderUpdate,
            format!("Updated order #{number} status from {old_status} to {new_status}"),
        )
        .target("Order", id)
        .ip(ip),
    )
    .await;

    let display = new_status.display();
    Ok(Json(StatusUpdateResult {
        order_id: id,
        order_number: updated.order_number,
        old_status,
        new_status,
        label: display.label.to_string(),
        color: display.color,
        progress: display.progress,
    }))
}

// ========== Pricing rules ==========

/// GET /api/admin/pricing-rules
pub async fn list_pricing_rules(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<PricingRule>>> {
    let rules = pricing_rule::find_all(&state.db.pool).await?;
    Ok(Json(rules))
}

fn validate_multipliers(express: Option<f64>, rush: Option<f64>) -> AppResult<()> {
    if let Some(m) = express {
        validate_multiplier(m, "express_multiplier")?;
    }
    if let Some(m) = rush {
        validate_multiplier(m, "rush_multiplier")?;
    }
    Ok(())
}

/// POST /api/admin/pricing-rules
pub async fn create_pricing_rule(
    State(state): State<ServerState>,
    admin: CurrentUser,
    ClientIp(ip): ClientIp,
    Json(payload): Json<PricingRuleCreate>,
) -> AppResult<Json<PricingRule>> {
    validate_money(payload.base_price, "base_price")?;
    validate_multipliers(payload.express_multiplier, payload.rush_multiplier)?;

    let rule = pricing_rule::create(&state.db.pool, payload, shared::util::now_millis()).await?;
    // A new rule has no previous price
    let old_price = 0.0;

    audit::record(
        &state.db.pool,
        AdminLogEntry::new(
            admin.id,
            AdminAction::PriceChange,
            format!(
                "Updated pricing for {} - {}: ${:.2} → ${:.2}",
                rule.service_level.label(),
                rule.item_type.label(),
                old_price,
                rule.base_price
            ),
        )
        .target("PricingRule", rule.id)
        .ip(ip),
    )
    .await;

    Ok(Json(rule))
}

/// PUT /api/admin/pricing-rules/:id
pub async fn update_pricing_rule(
    State(state): State<ServerState>,
    admin: CurrentUser,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(payload): Json<PricingRuleUpdate>,
) -> AppResult<Json<PricingRule>> {
    if let Some(price) = payload.base_price {
        validate_money(price, "base_price")?;
    }
    validate_multipliers(payload.express_multiplier, payload.rush_multiplier)?;

    let old_price = pricing_rule::find_by_id(&state.db.pool, id)
        .await?
        .map(|r| r.base_price)
        .ok_or_else(|| AppError::new(ErrorCode::PricingRuleNotFound).with_detail("id", id))?;
    let rule = pricing_rule::update(&state.db.pool, id, payload, shared::util::now_millis()).await?;

    audit::record(
        &state.db.pool,
        AdminLogEntry::new(
            admin.id,
            AdminAction::PriceChange,
            format!(
                "Updated pricing for {} - {}: ${:.2} → ${:.2}",
                rule.service_level.label(),
                rule.item_type.label(),
                old_price,
                rule.base_price
            ),
        )
        .target("PricingRule", rule.id)
        .ip(ip),
    )
    .await;

    Ok(Json(rule))
}

// ========== Users ==========

/// GET /api/admin/users - customers with order count and total spent
pub async fn list_users(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<UserSummary>>> {
    validate_optional_text(&query.search, "search", MAX_SEARCH_LEN)?;
    let (limit, offset) = page_bounds(query.limit, query.offset);
    let users =
        user::list_customers(&state.db.pool, query.search.as_deref(), limit, offset).await?;
    Ok(Json(users))
}

/// POST /api/admin/users/:id/action - activate, deactivate, make_staff
pub async fn user_action(
    State(state): State<ServerState>,
    admin: CurrentUser,
    ClientIp(ip): ClientIp,
    Path(id): Path<i64>,
    Json(payload): Json<UserActionRequest>,
) -> AppResult<Json<shared::models::User>> {
    if id == admin.id && payload.action == UserAction::Deactivate {
        return Err(AppError::with_message(
            ErrorCode::InvalidRequest,
            "Staff cannot deactivate their own account",
        ));
    }

    let target = user::apply_action(&state.db.pool, id, payload.action).await?;
    let description = match payload.action {
        UserAction::Activate => format!("Activated user account: {}", target.username),
        UserAction::Deactivate => format!("Deactivated user account: {}", target.username),
        UserAction::MakeStaff => {
            format!("Granted staff privileges to user: {}", target.username)
        }
    };

    audit::record(
        &state.db.pool,
        AdminLogEntry::new(admin.id, AdminAction::UserAction, description)
            .target("User", target.id)
            .ip(ip),
    )
    .await;

    Ok(Json(target))
}

// ========== Logs & jobs ==========

/// GET /api/admin/logs - newest first
pub async fn list_logs(
    State(state): State<ServerState>,
    Query(query): Query<AdminLogQuery>,
) -> AppResult<Json<Vec<AdminLog>>> {
    validate_optional_text(&query.admin, "admin", MAX_SEARCH_LEN)?;
    let (limit, offset) = page_bounds(query.limit, query.offset);
    let logs = admin_log::query(&state.db.pool, &query, limit, offset).await?;
    Ok(Json(logs))
}

/// POST /api/admin/progress - run one progression pass now
pub async fn run_progression(
    State(state): State<ServerState>,
    admin: CurrentUser,
) -> AppResult<Json<ProgressionReport>> {
    tracing::info!(staff_id = admin.id, "Manual progression pass requested");
    let report = progress_orders(&state.db.pool, shared::util::now_millis()).await?;
    Ok(Json(report))
}
