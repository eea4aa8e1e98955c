//! Time-based status progression
//!
//! Each pass walks a fixed transition table in order. An order is advanced
//! when it has sat in the `from` status for at least the transition's
//! threshold; the write is guarded by the expected status so a concurrent
//! pass or manual update simply wins.

use serde::Serialize;
use shared::order::OrderStatus;
use shared::util::minutes_to_millis;
use sqlx::SqlitePool;
use std::collections::HashSet;

use crate::db::repository::{RepoResult, order};

/// One automatic step of the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transition {
    pub from: OrderStatus,
    pub to: OrderStatus,
    /// Minutes the order must stay in `from`
    pub minutes: i64,
}

const fn step(from: OrderStatus, to: OrderStatus, minutes: i64) -> Transition {
    Transition { from, to, minutes }
}

/// Transition table, evaluated in declaration order
pub const TRANSITIONS: [Transition; 8] = [
    step(OrderStatus::Pending, OrderStatus::Confirmed, 5),
    step(OrderStatus::Confirmed, OrderStatus::PickedUp, 10),
    step(OrderStatus::PickedUp, OrderStatus::Washing, 15),
    step(OrderStatus::Washing, OrderStatus::Drying, 20),
    step(OrderStatus::Drying, OrderStatus::Folding, 15),
    step(OrderStatus::Folding, OrderStatus::Ready, 10),
    step(OrderStatus::Ready, OrderStatus::OutForDelivery, 5),
    step(OrderStatus::OutForDelivery, OrderStatus::Delivered, 10),
];

/// A single order moved by a pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advance {
    pub order_id: i64,
    pub order_number: Option<String>,
    pub from: OrderStatus,
    pub to: OrderStatus,
}

impl std::fmt::Display for Advance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self
            .order_number
            .clone()
            .unwrap_or_else(|| self.order_id.to_string());
        write!(f, "Order #{label}: {} → {}", self.from, self.to)
    }
}

/// Outcome of one progression pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProgressionReport {
    pub ran_at: i64,
    pub count: usize,
    pub advanced: Vec<Advance>,
}

/// Run one progression pass at time `now` (Unix millis)
pub async fn progress_orders(pool: &SqlitePool, now: i64) -> RepoResult<ProgressionReport> {
    let mut advanced = Vec::new();
    let mut touched: HashSet<i64> = HashSet::new();

    for transition in TRANSITIONS {
        let cutoff = now - minutes_to_millis(transition.minutes);
        let stale = order::find_stale(pool, transition.from, cutoff).await?;

        for candidate in stale {
            if touched.contains(&candidate.id) {
                continue;
            }
            let moved =
                order::advance_status(pool, candidate.id, transition.from, transition.to, now)
                    .await?;
            if !moved {
                tracing::debug!(order_id = candidate.id, "Order changed concurrently, skipped");
                continue;
            }
            touched.insert(candidate.id);
            let advance = Advance {
                order_id: candidate.id,
                order_number: candidate.order_number,
                from: transition.from,
                to: transition.to,
            };
            tracing::info!(target: "progression", "{advance}");
            advanced.push(advance);
        }
    }

    if advanced.is_empty() {
        tracing::warn!(target: "progression", "No orders to progress");
    } else {
        tracing::info!(
            target: "progression",
            count = advanced.len(),
            "Successfully progressed {} orders",
            advanced.len()
        );
    }

    Ok(ProgressionReport {
        ran_at: now,
        count: advanced.len(),
        advanced,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::{insert_user, pool};
    use shared::models::OrderCreate;

    const NOW: i64 = 1_709_632_800_000;

    async fn order_in(pool: &SqlitePool, status: OrderStatus, minutes_ago: i64) -> i64 {
        let user = insert_user(pool, &format!("user{status}{minutes_ago}"), false).await;
        let at = NOW - minutes_to_millis(minutes_ago);
        let created = order::create(pool, user, OrderCreate::default(), at).await.unwrap();
        order::set_status(pool, created.id, status, at).await.unwrap();
        created.id
    }

    #[test]
    fn test_table_follows_lifecycle() {
        for t in TRANSITIONS {
            assert_eq!(t.from.next(), Some(t.to));
            assert!(t.minutes > 0);
        }
        assert_eq!(TRANSITIONS[3].minutes, 20);
    }

    #[tokio::test]
    async fn test_washing_past_threshold_moves_to_drying() {
        let pool = pool().await;
        let id = order_in(&pool, OrderStatus::Washing, 21).await;

        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.advanced[0].from, OrderStatus::Washing);
        assert_eq!(report.advanced[0].to, OrderStatus::Drying);

        let reloaded = order::get(&pool, id).await.unwrap();
        assert_eq!(reloaded.status, OrderStatus::Drying);
        assert_eq!(reloaded.updated_at, NOW);
    }

    #[tokio::test]
    async fn test_washing_before_threshold_is_untouched() {
        let pool = pool().await;
        let id = order_in(&pool, OrderStatus::Washing, 10).await;
        let before = order::get(&pool, id).await.unwrap();

        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 0);
        assert!(report.advanced.is_empty());

        let after = order::get(&pool, id).await.unwrap();
        assert_eq!(after.status, OrderStatus::Washing);
        assert_eq!(after.updated_at, before.updated_at);
    }

    #[tokio::test]
    async fn test_threshold_is_inclusive() {
        let pool = pool().await;
        let id = order_in(&pool, OrderStatus::Pending, 5).await;
        progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(
            order::get(&pool, id).await.unwrap().status,
            OrderStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn test_order_moves_at_most_one_step_per_pass() {
        let pool = pool().await;
        // Old enough for every threshold
        let id = order_in(&pool, OrderStatus::Pending, 600).await;

        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(
            order::get(&pool, id).await.unwrap().status,
            OrderStatus::Confirmed
        );
    }

    #[tokio::test]
    async fn test_delivered_is_terminal() {
        let pool = pool().await;
        let id = order_in(&pool, OrderStatus::Delivered, 600).await;
        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 0);
        assert_eq!(
            order::get(&pool, id).await.unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[tokio::test]
    async fn test_empty_pass_writes_nothing() {
        let pool = pool().await;
        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 0);

        let before: i64 = sqlx::query_scalar("SELECT total_changes()")
            .fetch_one(&pool)
            .await
            .unwrap();
        progress_orders(&pool, NOW).await.unwrap();
        let after: i64 = sqlx::query_scalar("SELECT total_changes()")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_mixed_batch() {
        let pool = pool().await;
        let a = order_in(&pool, OrderStatus::Confirmed, 11).await;
        let b = order_in(&pool, OrderStatus::Folding, 9).await;
        let c = order_in(&pool, OrderStatus::OutForDelivery, 30).await;

        let report = progress_orders(&pool, NOW).await.unwrap();
        assert_eq!(report.count, 2);
        let moved: Vec<i64> = report.advanced.iter().map(|a| a.order_id).collect();
        assert_eq!(moved, vec![a, c], "declaration order of the table");
        assert_eq!(order::get(&pool, b).await.unwrap().status, OrderStatus::Folding);
        assert_eq!(
            order::get(&pool, c).await.unwrap().status,
            OrderStatus::Delivered
        );
    }

    #[test]
    fn test_advance_display() {
        let advance = Advance {
            order_id: 7,
            order_number: Some("LP00070305".into()),
            from: OrderStatus::Washing,
            to: OrderStatus::Drying,
        };
        assert_eq!(advance.to_string(), "Order #LP00070305: washing → drying");
    }
}
