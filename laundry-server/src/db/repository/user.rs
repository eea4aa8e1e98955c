//! User Repository

use super::{RepoError, RepoResult, like_pattern};
use shared::models::{User, UserAction, UserSummary};
use sqlx::SqlitePool;

const COLUMNS: &str =
    "id, username, email, first_name, last_name, is_staff, is_active, date_joined";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLUMNS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

/// Customers (non-staff) with order count and total spent, newest first
pub async fn list_customers(
    pool: &SqlitePool,
    search: Option<&str>,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<UserSummary>> {
    let pattern = search.filter(|s| !s.trim().is_empty()).map(like_pattern);
    let users = sqlx::query_as::<_, UserSummary>(
        "SELECT u.id AS id, u.username AS username, u.email AS email, u.first_name AS first_name, u.last_name AS last_name, u.is_staff AS is_staff, u.is_active AS is_active, u.date_joined AS date_joined, \
                COUNT(o.id) AS total_orders, COALESCE(SUM(o.total_cost), 0.0) AS total_spent \
         FROM user u LEFT JOIN laundry_order o ON o.user_id = u.id \
         WHERE u.is_staff = 0 \
           AND (?1 IS NULL OR u.username LIKE ?1 ESCAPE '\\' OR u.email LIKE ?1 ESCAPE '\\' OR u.first_name LIKE ?1 ESCAPE '\\' OR u.last_name LIKE ?1 ESCAPE '\\') \
         GROUP BY u.id ORDER BY u.date_joined DESC, u.id DESC LIMIT ?2 OFFSET ?3",
    )
    .bind(pattern)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(users)
}

pub async fn count_customers(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM user WHERE is_staff = 0")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Apply an account management action and return the updated row
pub async fn apply_action(pool: &SqlitePool, id: i64, action: UserAction) -> RepoResult<User> {
    let sql = match action {
        UserAction::Activate => "UPDATE user SET is_active = 1 WHERE id = ?",
        UserAction::Deactivate => "UPDATE user SET is_active = 0 WHERE id = ?",
        UserAction::MakeStaff => "UPDATE user SET is_staff = 1 WHERE id = ?",
    };
    let rows = sqlx::query(sql).bind(id).execute(pool).await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::UserNotFound(id));
    }
    find_by_id(pool, id)
        .await?
        .ok_or(RepoError::UserNotFound(id))
}
