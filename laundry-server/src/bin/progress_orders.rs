//! One progression pass over the configured database
//!
//! Meant for an external scheduler:
//!
//! ```text
//! */5 * * * * DATABASE_PATH=/var/lib/laundry/laundry.db progress_orders
//! ```

use anyhow::Context;
use laundry_server::{DbService, progress_orders, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    let db = DbService::new(&config.database_path)
        .await
        .with_context(|| format!("failed to open database {}", config.database_path))?;

    let report = progress_orders(&db.pool, shared::util::now_millis())
        .await
        .context("progression pass failed")?;

    for advance in &report.advanced {
        println!("{advance}");
    }
    println!("Progressed {} orders", report.count);

    db.pool.close().await;
    Ok(())
}
