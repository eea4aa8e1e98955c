//! Laundry Server - order lifecycle and pricing backend for a laundry service
//!
//! # Modules
//!
//! ```text
//! laundry-server/src/
//! ├── core/          # config, state, HTTP server, background tasks
//! ├── auth/          # caller identity, staff gate
//! ├── api/           # HTTP routes and handlers
//! ├── audit/         # admin action log
//! ├── db/            # SQLite pool and repositories
//! ├── orders/        # status progression
//! ├── pricing/       # unit price quoting
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod audit;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod pricing;
pub mod utils;

pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState, build_app};
pub use db::DbService;
pub use orders::{ProgressionReport, progress_orders};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::init_logger_with_file;

/// Security event log, emitted on the `security` target
///
/// ```ignore
/// security_log!("WARN", "staff_required", user_id = 7);
/// ```
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr $(, $key:ident = $value:expr)* $(,)?) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event
            $(, $key = $value)*
        );
    };
}

/// Load `.env`, read the configuration and initialize logging from it
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(config.log_level.as_deref(), config.log_dir.as_deref());
    config
}
