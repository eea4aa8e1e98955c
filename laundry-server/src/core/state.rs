use std::sync::Arc;
use std::time::Duration;

use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::orders::ProgressionScheduler;

/// Shared server state
///
/// Cheap to clone: the pool is reference counted and the config sits
/// behind an `Arc`.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Arc<Config> | immutable configuration |
/// | db | DbService | SQLite pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config: Arc::new(config),
            db,
        }
    }

    /// Open the database at `config.database_path` and run migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        tracing::info!(path = %config.database_path, "Database ready");
        Ok(Self::new(config.clone(), db))
    }

    /// Register background tasks
    ///
    /// The progression scheduler only runs when
    /// `PROGRESSION_INTERVAL_SECS` is non-zero; otherwise progression is
    /// left to the `progress_orders` binary.
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new();

        if self.config.progression_enabled() {
            let scheduler = ProgressionScheduler::new(
                self.db.pool.clone(),
                Duration::from_secs(self.config.progression_interval_secs),
                tasks.shutdown_token(),
            );
            tasks.spawn("order_progression", TaskKind::Periodic, scheduler.run());
        } else {
            tracing::info!("In-process order progression disabled");
        }

        tasks.log_summary();
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_background_tasks_follow_config() {
        let db = DbService::in_memory().await.unwrap();
        let mut config = Config::with_overrides(":memory:", 0);

        config.progression_interval_secs = 0;
        let state = ServerState::new(config.clone(), db.clone());
        let tasks = state.start_background_tasks();
        assert!(tasks.is_empty());

        config.progression_interval_secs = 3600;
        let state = ServerState::new(config, db);
        let tasks = state.start_background_tasks();
        assert_eq!(tasks.len(), 1);
        tasks.shutdown(Duration::from_secs(1)).await;
    }
}
