//! `AuthUser` extractor — pulls the JWT from the Authorization header, validates, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use staffhub_auth::error::AuthError;
use staffhub_auth::RequestContext;
use staffhub_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// The gate is stateless: a structurally valid, correctly signed,
/// unexpired access token is accepted without a session lookup. Session
/// rows are only consulted on the refresh path.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing Authorization header")))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError(AppError::unauthorized("Invalid Authorization header format")))?;

        let claims = state
            .jwt_decoder
            .decode_access_token(token)
            .map_err(AuthError::Token)?;

        let ctx = RequestContext::new(
            claims.user_id(),
            claims.session_id(),
            claims.roles,
            claims.username,
        );

        Ok(AuthUser(ctx))
    }
}
