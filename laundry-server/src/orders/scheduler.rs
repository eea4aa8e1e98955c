//! Periodic progression
//!
//! Registered as `TaskKind::Periodic` when `PROGRESSION_INTERVAL_SECS` is
//! non-zero; runs one pass per tick until shutdown.

use sqlx::SqlitePool;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use super::progression::progress_orders;

pub struct ProgressionScheduler {
    pool: SqlitePool,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ProgressionScheduler {
    pub fn new(pool: SqlitePool, interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            pool,
            interval,
            shutdown,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Progression scheduler started"
        );
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Progression scheduler received shutdown signal");
                    return;
                }
            }

            if let Err(e) = progress_orders(&self.pool, shared::util::now_millis()).await {
                tracing::error!(error = %e, "Progression pass failed");
            }
        }
    }
}
