//! Order Repository

use super::{RepoError, RepoResult, like_pattern};
use chrono::NaiveDate;
use shared::models::{Order, OrderCreate, OrderQuery, OrderSummary, OrderUpdate, StatusCount};
use shared::order::money::sum_money;
use shared::order::{MoneyError, OrderStatus, order_number};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, user_id, reservation_id, order_number, status, total_items, total_cost, special_instructions, estimated_completion, created_at, updated_at";

const SUMMARY_SELECT: &str = "SELECT o.id AS id, o.user_id AS user_id, o.reservation_id AS reservation_id, o.order_number AS order_number, o.status AS status, o.total_items AS total_items, o.total_cost AS total_cost, o.special_instructions AS special_instructions, o.estimated_completion AS estimated_completion, o.created_at AS created_at, o.updated_at AS updated_at, u.username AS username, u.email AS email FROM laundry_order o JOIN user u ON u.id = o.user_id";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Order>> {
    let order = sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM laundry_order WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(order)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Order> {
    find_by_id(pool, id)
        .await?
        .ok_or(RepoError::OrderNotFound(id))
}

/// Insert a pending order and assign its number in one transaction
///
/// The number is derived from the row id, so the row is inserted first and the
/// number written in a second, number-only update.
pub async fn create(
    pool: &SqlitePool,
    user_id: i64,
    data: OrderCreate,
    now: i64,
) -> RepoResult<Order> {
    let mut tx = pool.begin().await?;

    let id = insert_pending(&mut tx, user_id, &data, now).await?;
    let number = assign_order_number(&mut tx, id, shared::util::utc_date(now)).await?;

    tx.commit().await?;
    tracing::debug!(order_id = id, order_number = %number, "Order created");

    get(pool, id).await
}

/// First step of order creation: persist the row and return its id
///
/// The row has no order number until [`assign_order_number`] runs.
pub async fn insert_pending(
    conn: &mut SqliteConnection,
    user_id: i64,
    data: &OrderCreate,
    now: i64,
) -> RepoResult<i64> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO laundry_order (user_id, reservation_id, status, total_items, total_cost, special_instructions, estimated_completion, created_at, updated_at) VALUES (?1, ?2, ?3, 0, 0, ?4, ?5, ?6, ?6) RETURNING id",
    )
    .bind(user_id)
    .bind(data.reservation_id)
    .bind(OrderStatus::Pending)
    .bind(data.special_instructions.as_deref().unwrap_or_default())
    .bind(data.estimated_completion)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;
    Ok(id)
}

/// Second step of order creation: write the order number for a persisted row
///
/// Precondition: the row `id` exists. Only the number column is written, and
/// only while it is still empty; an order that already has a number keeps it
/// and that number is returned.
pub async fn assign_order_number(
    conn: &mut SqliteConnection,
    id: i64,
    date: NaiveDate,
) -> RepoResult<String> {
    let number = order_number(id, date);
    let result = sqlx::query(
        "UPDATE laundry_order SET order_number = ? WHERE id = ? AND order_number IS NULL",
    )
    .bind(&number)
    .bind(id)
    .execute(&mut *conn)
    .await
    .map_err(|e| match RepoError::from(e) {
        RepoError::Duplicate(_) => RepoError::OrderNumberTaken(number.clone()),
        other => other,
    })?;

    if result.rows_affected() == 1 {
        return Ok(number);
    }

    let existing: Option<Option<String>> =
        sqlx::query_scalar("SELECT order_number FROM laundry_order WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
    match existing {
        Some(Some(number)) => Ok(number),
        Some(None) => Err(RepoError::Database(format!(
            "Order {id} number assignment had no effect"
        ))),
        None => Err(RepoError::OrderNotFound(id)),
    }
}

pub async fn update(pool: &SqlitePool, id: i64, data: OrderUpdate, now: i64) -> RepoResult<Order> {
    let rows = sqlx::query(
        "UPDATE laundry_order SET special_instructions = COALESCE(?1, special_instructions), estimated_completion = COALESCE(?2, estimated_completion), updated_at = ?3 WHERE id = ?4",
    )
    .bind(data.special_instructions)
    .bind(data.estimated_completion)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::OrderNotFound(id));
    }
    get(pool, id).await
}

/// Unconditional status change (manual update)
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: OrderStatus,
    now: i64,
) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE laundry_order SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::OrderNotFound(id));
    }
    get(pool, id).await
}

/// Compare-and-set status change; `false` when the order is no longer in `from`
pub async fn advance_status(
    pool: &SqlitePool,
    id: i64,
    from: OrderStatus,
    to: OrderStatus,
    now: i64,
) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE laundry_order SET status = ?1, updated_at = ?2 WHERE id = ?3 AND status = ?4",
    )
    .bind(to)
    .bind(now)
    .bind(id)
    .bind(from)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() == 1)
}

/// Orders in `status` whose last update is at or before `cutoff`
pub async fn find_stale(
    pool: &SqlitePool,
    status: OrderStatus,
    cutoff: i64,
) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as::<_, Order>(&format!(
        "SELECT {COLUMNS} FROM laundry_order WHERE status = ? AND updated_at <= ? ORDER BY id"
    ))
    .bind(status)
    .bind(cutoff)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM laundry_order WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Filtered order list, newest first; `owner` restricts to one user's orders
pub async fn list(
    pool: &SqlitePool,
    query: &OrderQuery,
    owner: Option<i64>,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<OrderSummary>> {
    let search = query
        .search
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(like_pattern);
    let orders = sqlx::query_as::<_, OrderSummary>(&format!(
        "{SUMMARY_SELECT} \
         WHERE (?1 IS NULL OR o.user_id = ?1) \
           AND (?2 IS NULL OR o.status = ?2) \
           AND (?3 IS NULL OR o.order_number LIKE ?3 ESCAPE '\\' OR u.username LIKE ?3 ESCAPE '\\' OR u.email LIKE ?3 ESCAPE '\\') \
           AND (?4 IS NULL OR o.created_at >= ?4) \
           AND (?5 IS NULL OR o.created_at <= ?5) \
         ORDER BY o.created_at DESC, o.id DESC LIMIT ?6 OFFSET ?7"
    ))
    .bind(owner)
    .bind(query.status)
    .bind(search)
    .bind(query.date_from)
    .bind(query.date_to)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Most recently created orders
pub async fn recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<OrderSummary>> {
    let orders = sqlx::query_as::<_, OrderSummary>(&format!(
        "{SUMMARY_SELECT} ORDER BY o.created_at DESC, o.id DESC LIMIT ?"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Order count per status, in lifecycle order; `owner` restricts to one user
pub async fn count_by_status(
    pool: &SqlitePool,
    owner: Option<i64>,
) -> RepoResult<Vec<StatusCount>> {
    let mut counts = sqlx::query_as::<_, StatusCount>(
        "SELECT status, COUNT(*) AS count FROM laundry_order WHERE (?1 IS NULL OR user_id = ?1) GROUP BY status",
    )
    .bind(owner)
    .fetch_all(pool)
    .await?;
    counts.sort_by_key(|c| c.status);
    Ok(counts)
}

pub async fn count_all(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM laundry_order")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// `total_cost` of every delivered order
pub async fn delivered_totals(pool: &SqlitePool) -> RepoResult<Vec<f64>> {
    let totals = sqlx::query_scalar::<_, f64>(
        "SELECT total_cost FROM laundry_order WHERE status = ?",
    )
    .bind(OrderStatus::Delivered)
    .fetch_all(pool)
    .await?;
    Ok(totals)
}

/// Recompute `total_items` and `total_cost` from the order's items
///
/// Leaves `updated_at` alone so item edits do not reset the status timer.
pub async fn recalculate_totals(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<()> {
    let lines: Vec<(i64, f64)> =
        sqlx::query_as("SELECT quantity, total_price FROM order_item WHERE order_id = ?")
            .bind(order_id)
            .fetch_all(&mut *conn)
            .await?;

    let total_items = lines
        .iter()
        .try_fold(0i64, |acc, (q, _)| acc.checked_add(*q))
        .ok_or(RepoError::Money(MoneyError::Overflow))?;
    let total_cost = sum_money(lines.iter().map(|(_, t)| *t))?;

    let rows = sqlx::query("UPDATE laundry_order SET total_items = ?, total_cost = ? WHERE id = ?")
        .bind(total_items)
        .bind(total_cost)
        .bind(order_id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::OrderNotFound(order_id));
    }
    Ok(())
}
