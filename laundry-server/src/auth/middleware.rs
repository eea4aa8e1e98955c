//! Identity middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, resolve};
use crate::core::ServerState;
use crate::security_log;
use crate::utils::AppError;

/// Resolve the caller and inject [`CurrentUser`] into request extensions
///
/// Skipped for `OPTIONS`, non-API paths and `/api/health`.
pub async fn require_user(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path();
    if req.method() == http::Method::OPTIONS
        || !path.starts_with("/api/")
        || path == "/api/health"
    {
        return Ok(next.run(req).await);
    }

    let user = resolve(&state.db.pool, req.headers()).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

/// Reject callers without staff rights (403)
pub async fn require_staff(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(AppError::not_authenticated)?;
    if !user.is_staff() {
        security_log!(
            "WARN",
            "staff_required",
            user_id = user.id,
            username = user.username.as_str(),
            path = req.uri().path()
        );
        return Err(AppError::staff_required());
    }
    Ok(next.run(req).await)
}
