//! Reservation Repository (read-only)

use super::RepoResult;
use shared::models::Reservation;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let reservation = sqlx::query_as::<_, Reservation>(
        "SELECT id, user_id, pickup_at, delivery_at, address, phone_number, notes, priority, status, estimated_cost, final_cost, created_at, updated_at FROM reservation WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(reservation)
}

pub async fn count_all(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reservation")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{insert_reservation, insert_user, pool};
    use shared::order::Priority;

    #[tokio::test]
    async fn test_find_by_id() {
        let pool = pool().await;
        let user = insert_user(&pool, "alice", false).await;
        let id = insert_reservation(&pool, user, Priority::Rush).await;

        let reservation = find_by_id(&pool, id).await.unwrap().unwrap();
        assert_eq!(reservation.user_id, user);
        assert_eq!(reservation.priority, Priority::Rush);
        assert!(find_by_id(&pool, id + 1).await.unwrap().is_none());
        assert_eq!(count_all(&pool).await.unwrap(), 1);
    }
}
