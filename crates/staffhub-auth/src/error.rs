//! Internal authentication error taxonomy.
//!
//! Every rejection reason is distinguishable here for logging, but the
//! conversion into [`AppError`] collapses the whole 401 family into
//! uniform messages so callers cannot probe validation internals or
//! enumerate usernames.

use thiserror::Error;

use staffhub_core::error::AppError;

/// Why a presented token was rejected by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token structure could not be parsed.
    #[error("token is malformed")]
    Malformed,
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// The signature does not verify against the server key.
    #[error("token signature is invalid")]
    SignatureInvalid,
    /// An access token was presented where a refresh token is required,
    /// or vice versa.
    #[error("token is of the wrong kind")]
    WrongKind,
}

/// Authentication and session lifecycle failures.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Always reported identically.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The presented token failed codec validation.
    #[error(transparent)]
    Token(#[from] TokenError),
    /// No live session exists for the presented refresh token — it was
    /// revoked, already rotated, or never issued.
    #[error("no active session for refresh token")]
    SessionNotFound,
    /// A concurrent rotation won the race for this refresh token.
    #[error("refresh token was already rotated")]
    RotationConflict,
    /// The caller is authenticated but lacks a required role.
    #[error("insufficient role")]
    RoleDenied,
    /// The credential or session store failed. Deliberately NOT part of
    /// the 401 family: infrastructure failure must never masquerade as a
    /// security denial.
    #[error(transparent)]
    Store(AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Store(e) => e,
            AuthError::RoleDenied => AppError::forbidden("Insufficient role for this operation"),
            AuthError::InvalidCredentials => {
                AppError::unauthorized("Invalid username or password")
            }
            reason @ (AuthError::Token(_)
            | AuthError::SessionNotFound
            | AuthError::RotationConflict) => {
                tracing::warn!(%reason, "authentication rejected");
                AppError::unauthorized("Invalid or expired token")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffhub_core::error::ErrorKind;

    #[test]
    fn token_family_collapses_to_uniform_unauthorized() {
        for err in [
            AuthError::Token(TokenError::Malformed),
            AuthError::Token(TokenError::Expired),
            AuthError::Token(TokenError::SignatureInvalid),
            AuthError::Token(TokenError::WrongKind),
            AuthError::SessionNotFound,
            AuthError::RotationConflict,
        ] {
            let app: AppError = err.into();
            assert_eq!(app.kind, ErrorKind::Unauthorized);
            assert_eq!(app.message, "Invalid or expired token");
        }
    }

    #[test]
    fn credential_failure_is_generic() {
        let app: AppError = AuthError::InvalidCredentials.into();
        assert_eq!(app.kind, ErrorKind::Unauthorized);
        assert_eq!(app.message, "Invalid username or password");
    }

    #[test]
    fn role_denied_is_forbidden_not_unauthorized() {
        let app: AppError = AuthError::RoleDenied.into();
        assert_eq!(app.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn store_errors_pass_through_unchanged() {
        let app: AppError = AuthError::Store(AppError::database("pool exhausted")).into();
        assert_eq!(app.kind, ErrorKind::Database);
        assert_eq!(app.message, "pool exhausted");
    }
}
