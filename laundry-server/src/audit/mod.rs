//! Admin action log
//!
//! Handlers call [`record`] explicitly after a successful staff action.
//! Nothing is logged as a side effect of persistence.

pub mod types;

pub use types::AdminLogEntry;

use axum::extract::{ConnectInfo, FromRequestParts};
use http::HeaderMap;
use http::request::Parts;
use shared::models::AdminLog;
use sqlx::SqlitePool;
use std::convert::Infallible;
use std::net::SocketAddr;

use crate::db::repository::admin_log::{self, NewAdminLog};

/// Append an entry to the admin log
///
/// The action being logged has already been committed, so a failed write is
/// reported and swallowed.
pub async fn record(pool: &SqlitePool, entry: AdminLogEntry) -> Option<AdminLog> {
    let action = entry.action;
    let row = NewAdminLog {
        admin_user_id: entry.admin_user_id,
        action_type: entry.action,
        description: entry.description,
        target_model: entry.target_model,
        target_id: entry.target_id,
        ip_address: entry.ip_address,
        created_at: shared::util::now_millis(),
    };
    match admin_log::insert(pool, row).await {
        Ok(log) => {
            tracing::info!(
                target: "audit",
                admin_user_id = log.admin_user_id,
                action = %action,
                "{}",
                log.description
            );
            Some(log)
        }
        Err(e) => {
            tracing::error!(target: "audit", action = %action, error = %e, "Failed to record admin log");
            None
        }
    }
}

/// Client address: first `X-Forwarded-For` entry, else the peer address
pub fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| peer.map(|addr| addr.ip().to_string()))
}

/// Client address of the current request, see [`client_ip`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIp(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|info| info.0);
        Ok(ClientIp(client_ip(&parts.headers, peer)))
    }
}
