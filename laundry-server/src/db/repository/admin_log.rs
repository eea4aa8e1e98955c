//! Admin Log Repository

use super::{RepoError, RepoResult, like_pattern};
use shared::models::{AdminAction, AdminLog, AdminLogQuery};
use sqlx::SqlitePool;

/// Row to append to the admin log
#[derive(Debug, Clone)]
pub struct NewAdminLog {
    pub admin_user_id: i64,
    pub action_type: AdminAction,
    pub description: String,
    pub target_model: Option<String>,
    pub target_id: Option<i64>,
    pub ip_address: Option<String>,
    pub created_at: i64,
}

const SELECT: &str = "SELECT l.id AS id, l.admin_user_id AS admin_user_id, u.username AS admin_username, l.action_type AS action_type, l.description AS description, l.target_model AS target_model, l.target_id AS target_id, l.ip_address AS ip_address, l.created_at AS created_at FROM admin_log l JOIN user u ON u.id = l.admin_user_id";

pub async fn insert(pool: &SqlitePool, entry: NewAdminLog) -> RepoResult<AdminLog> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO admin_log (admin_user_id, action_type, description, target_model, target_id, ip_address, created_at) VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(entry.admin_user_id)
    .bind(entry.action_type)
    .bind(&entry.description)
    .bind(&entry.target_model)
    .bind(entry.target_id)
    .bind(&entry.ip_address)
    .bind(entry.created_at)
    .fetch_one(pool)
    .await?;

    let log = sqlx::query_as::<_, AdminLog>(&format!("{SELECT} WHERE l.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    log.ok_or_else(|| RepoError::Database("Failed to record admin log".into()))
}

/// Newest first, filtered by action type and acting username substring
pub async fn query(
    pool: &SqlitePool,
    filter: &AdminLogQuery,
    limit: i64,
    offset: i64,
) -> RepoResult<Vec<AdminLog>> {
    let admin = filter
        .admin
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(like_pattern);
    let logs = sqlx::query_as::<_, AdminLog>(&format!(
        "{SELECT} WHERE (?1 IS NULL OR l.action_type = ?1) AND (?2 IS NULL OR u.username LIKE ?2 ESCAPE '\\') \
         ORDER BY l.created_at DESC, l.id DESC LIMIT ?3 OFFSET ?4"
    ))
    .bind(filter.action)
    .bind(admin)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{insert_user, pool};

    fn entry(admin_user_id: i64, action_type: AdminAction, at: i64) -> NewAdminLog {
        NewAdminLog {
            admin_user_id,
            action_type,
            description: format!("{action_type} at {at}"),
            target_model: Some("Order".into()),
            target_id: Some(1),
            ip_address: Some("10.0.0.1".into()),
            created_at: at,
        }
    }

    #[tokio::test]
    async fn test_insert_and_filter() {
        let pool = pool().await;
        let ann = insert_user(&pool, "ann_admin", true).await;
        let ben = insert_user(&pool, "ben_admin", true).await;

        let log = insert(&pool, entry(ann, AdminAction::OrderUpdate, 1)).await.unwrap();
        assert_eq!(log.admin_username, "ann_admin");
        assert_eq!(log.ip_address.as_deref(), Some("10.0.0.1"));
        insert(&pool, entry(ben, AdminAction::PriceChange, 2)).await.unwrap();
        insert(&pool, entry(ann, AdminAction::UserAction, 3)).await.unwrap();

        let all = query(&pool, &AdminLogQuery::default(), 50, 0).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].created_at, 3, "newest first");

        let by_action = AdminLogQuery {
            action: Some(AdminAction::PriceChange),
            ..Default::default()
        };
        let rows = query(&pool, &by_action, 50, 0).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].admin_username, "ben_admin");

        let by_admin = AdminLogQuery {
            admin: Some("ANN".into()),
            ..Default::default()
        };
        assert_eq!(query(&pool, &by_admin, 50, 0).await.unwrap().len(), 2);

        let paged = query(&pool, &AdminLogQuery::default(), 1, 1).await.unwrap();
        assert_eq!(paged.len(), 1);
        assert_eq!(paged[0].created_at, 2);
    }
}
