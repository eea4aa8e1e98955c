//! Order Item Repository
//!
//! Every write recomputes `total_price` from `unit_price × quantity` and the
//! owning order's aggregates, in one transaction.

use super::{RepoError, RepoResult, order};
use shared::models::{OrderItem, OrderItemUpdate};
use shared::order::{ItemType, ServiceLevel, line_total};
use sqlx::{SqliteConnection, SqlitePool};

const COLUMNS: &str = "id, order_id, item_type, service_level, quantity, unit_price, total_price, instructions, stain_notes";

/// Fully resolved line ready for insertion
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub item_type: ItemType,
    pub service_level: ServiceLevel,
    pub quantity: i64,
    pub unit_price: f64,
    pub instructions: String,
    pub stain_notes: String,
}

pub async fn find_by_order(pool: &SqlitePool, order_id: i64) -> RepoResult<Vec<OrderItem>> {
    let items = sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {COLUMNS} FROM order_item WHERE order_id = ? ORDER BY id"
    ))
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn find_by_id(
    pool: &SqlitePool,
    order_id: i64,
    item_id: i64,
) -> RepoResult<Option<OrderItem>> {
    let mut conn = pool.acquire().await?;
    fetch(&mut conn, order_id, item_id).await
}

async fn fetch(
    conn: &mut SqliteConnection,
    order_id: i64,
    item_id: i64,
) -> RepoResult<Option<OrderItem>> {
    let item = sqlx::query_as::<_, OrderItem>(&format!(
        "SELECT {COLUMNS} FROM order_item WHERE id = ? AND order_id = ?"
    ))
    .bind(item_id)
    .bind(order_id)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(item)
}

async fn ensure_order(conn: &mut SqliteConnection, order_id: i64) -> RepoResult<()> {
    let exists: Option<i64> = sqlx::query_scalar("SELECT id FROM laundry_order WHERE id = ?")
        .bind(order_id)
        .fetch_optional(&mut *conn)
        .await?;
    exists.map(|_| ()).ok_or(RepoError::OrderNotFound(order_id))
}

pub async fn create(pool: &SqlitePool, order_id: i64, item: NewOrderItem) -> RepoResult<OrderItem> {
    let mut tx = pool.begin().await?;
    ensure_order(&mut tx, order_id).await?;

    let total_price = line_total(item.quantity, item.unit_price)?;
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO order_item (order_id, item_type, service_level, quantity, unit_price, total_price, instructions, stain_notes) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(order_id)
    .bind(item.item_type)
    .bind(item.service_level)
    .bind(item.quantity)
    .bind(item.unit_price)
    .bind(total_price)
    .bind(&item.instructions)
    .bind(&item.stain_notes)
    .fetch_one(&mut *tx)
    .await?;

    order::recalculate_totals(&mut tx, order_id).await?;
    let created = fetch(&mut tx, order_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create order item".into()))?;
    tx.commit().await?;
    Ok(created)
}

/// Partial update; the line total is always recomputed from the merged row
pub async fn update(
    pool: &SqlitePool,
    order_id: i64,
    item_id: i64,
    data: OrderItemUpdate,
) -> RepoResult<OrderItem> {
    let mut tx = pool.begin().await?;
    let current = fetch(&mut tx, order_id, item_id)
        .await?
        .ok_or(RepoError::ItemNotFound(item_id))?;

    let quantity = data.quantity.unwrap_or(current.quantity);
    let unit_price = data.unit_price.unwrap_or(current.unit_price);
    let total_price = line_total(quantity, unit_price)?;

    sqlx::query(
        "UPDATE order_item SET item_type = ?1, service_level = ?2, quantity = ?3, unit_price = ?4, total_price = ?5, instructions = ?6, stain_notes = ?7 WHERE id = ?8",
    )
    .bind(data.item_type.unwrap_or(current.item_type))
    .bind(data.service_level.unwrap_or(current.service_level))
    .bind(quantity)
    .bind(unit_price)
    .bind(total_price)
    .bind(data.instructions.unwrap_or(current.instructions))
    .bind(data.stain_notes.unwrap_or(current.stain_notes))
    .bind(item_id)
    .execute(&mut *tx)
    .await?;

    order::recalculate_totals(&mut tx, order_id).await?;
    let updated = fetch(&mut tx, order_id, item_id)
        .await?
        .ok_or(RepoError::ItemNotFound(item_id))?;
    tx.commit().await?;
    Ok(updated)
}

/// Remove one line; the order itself is kept
pub async fn delete(pool: &SqlitePool, order_id: i64, item_id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    let rows = sqlx::query("DELETE FROM order_item WHERE id = ? AND order_id = ?")
        .bind(item_id)
        .bind(order_id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::ItemNotFound(item_id));
    }
    order::recalculate_totals(&mut tx, order_id).await?;
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{insert_user, pool};
    use shared::models::OrderCreate;

    fn shirt(quantity: i64, unit_price: f64) -> NewOrderItem {
        NewOrderItem {
            item_type: ItemType::Shirt,
            service_level: ServiceLevel::WashFold,
            quantity,
            unit_price,
            instructions: String::new(),
            stain_notes: String::new(),
        }
    }

    async fn order_for(pool: &SqlitePool, name: &str) -> i64 {
        let user = insert_user(pool, name, false).await;
        order::create(pool, user, OrderCreate::default(), 1_000)
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_create_computes_total_and_aggregates() {
        let pool = pool().await;
        let order_id = order_for(&pool, "alice").await;

        let item = create(&pool, order_id, shirt(3, 2.50)).await.unwrap();
        assert_eq!(item.total_price, 7.50);

        create(&pool, order_id, shirt(2, 0.10)).await.unwrap();
        let order = order::get(&pool, order_id).await.unwrap();
        assert_eq!(order.total_items, 5);
        assert_eq!(order.total_cost, 7.70);
        // Aggregate refresh does not touch the status timer
        assert_eq!(order.updated_at, 1_000);
    }

    #[tokio::test]
    async fn test_update_recomputes_without_drift() {
        let pool = pool().await;
        let order_id = order_for(&pool, "bob").await;
        let item = create(&pool, order_id, shirt(3, 0.10)).await.unwrap();

        for _ in 0..5 {
            let saved = update(&pool, order_id, item.id, OrderItemUpdate::default())
                .await
                .unwrap();
            assert_eq!(saved.total_price, 0.30);
        }

        let changed = update(
            &pool,
            order_id,
            item.id,
            OrderItemUpdate {
                quantity: Some(4),
                instructions: Some("Starch collars".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(changed.total_price, 0.40);
        assert_eq!(changed.instructions, "Starch collars");
        assert_eq!(order::get(&pool, order_id).await.unwrap().total_items, 4);
    }

    #[tokio::test]
    async fn test_unrepresentable_total_is_rejected() {
        let pool = pool().await;
        let order_id = order_for(&pool, "erin").await;

        let err = create(&pool, order_id, shirt(2, 1e30)).await.unwrap_err();
        assert!(matches!(err, RepoError::Money(_)));
        let err = create(&pool, order_id, shirt(i64::MAX, 1e12)).await.unwrap_err();
        assert!(matches!(err, RepoError::Money(_)));

        // Nothing was written and the order totals are untouched
        assert!(find_by_order(&pool, order_id).await.unwrap().is_empty());
        assert_eq!(order::get(&pool, order_id).await.unwrap().total_cost, 0.0);
    }

    #[tokio::test]
    async fn test_delete_item_keeps_order() {
        let pool = pool().await;
        let order_id = order_for(&pool, "carol").await;
        let item = create(&pool, order_id, shirt(1, 5.00)).await.unwrap();

        delete(&pool, order_id, item.id).await.unwrap();

        let order = order::get(&pool, order_id).await.unwrap();
        assert_eq!(order.total_items, 0);
        assert_eq!(order.total_cost, 0.0);
        assert!(find_by_order(&pool, order_id).await.unwrap().is_empty());

        let err = delete(&pool, order_id, item.id).await.unwrap_err();
        assert!(matches!(err, RepoError::ItemNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_order_cascades_to_items() {
        let pool = pool().await;
        let order_id = order_for(&pool, "dave").await;
        create(&pool, order_id, shirt(1, 5.00)).await.unwrap();
        create(&pool, order_id, shirt(2, 3.00)).await.unwrap();

        assert!(order::delete(&pool, order_id).await.unwrap());

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM order_item")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }

    #[tokio::test]
    async fn test_item_scoped_to_order() {
        let pool = pool().await;
        let first = order_for(&pool, "erin").await;
        let second = order_for(&pool, "frank").await;
        let item = create(&pool, first, shirt(1, 1.00)).await.unwrap();

        assert!(find_by_id(&pool, second, item.id).await.unwrap().is_none());
        let err = update(&pool, second, item.id, OrderItemUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::ItemNotFound(_)));
    }

    #[tokio::test]
    async fn test_create_on_missing_order() {
        let pool = pool().await;
        let err = create(&pool, 42, shirt(1, 1.00)).await.unwrap_err();
        assert!(matches!(err, RepoError::OrderNotFound(42)));
    }
}
