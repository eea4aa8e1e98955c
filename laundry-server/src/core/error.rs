use thiserror::Error;

/// Startup and serving failures
///
/// Request-level failures are [`AppError`](crate::utils::AppError); this type
/// only covers the process lifecycle.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("database initialization failed: {0}")]
    Database(#[from] crate::utils::AppError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
