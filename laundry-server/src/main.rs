use anyhow::Context;
use laundry_server::{Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = setup_environment();
    tracing::info!(
        environment = %config.environment,
        database = %config.database_path,
        "Laundry server starting..."
    );

    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    Server::with_state(config, state)
        .run()
        .await
        .context("server error")?;

    Ok(())
}
