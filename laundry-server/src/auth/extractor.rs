//! CurrentUser Extractor
//!
//! Reuses the user injected by [`require_user`](super::require_user), or
//! resolves it from the request headers when the middleware did not run.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::auth::{CurrentUser, resolve};
use crate::core::ServerState;
use crate::utils::AppError;

impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let user = resolve(&state.db.pool, &parts.headers).await?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
