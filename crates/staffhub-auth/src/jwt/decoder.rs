//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use staffhub_core::config::AuthConfig;

use super::claims::{Claims, TokenKind};
use crate::error::TokenError;

/// Validates JWT tokens: signature, expiry, and kind.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_token(token, TokenKind::Access)
    }

    /// Decodes and validates a refresh token string.
    ///
    /// Signature validity alone does not make a refresh token usable;
    /// the orchestrator must still confirm a live session exists for it.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode_token(token, TokenKind::Refresh)
    }

    fn decode_token(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })?;

        if token_data.claims.kind != expected {
            return Err(TokenError::WrongKind);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use staffhub_core::config::AuthConfig;
    use staffhub_entity::user::{User, UserRole};
    use uuid::Uuid;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: None,
            password_hash: String::new(),
            roles: vec![UserRole::Hr, UserRole::User],
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn round_trip_preserves_subject_roles_and_kind() {
        let config = test_config("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let user = test_user();
        let session_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(&user, session_id).unwrap();

        let access = decoder.decode_access_token(&pair.access_token).unwrap();
        assert_eq!(access.sub, user.id);
        assert_eq!(access.sid, session_id);
        assert_eq!(access.roles, user.roles);
        assert_eq!(access.kind, TokenKind::Access);

        let refresh = decoder.decode_refresh_token(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, user.id);
        assert_eq!(refresh.kind, TokenKind::Refresh);
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let config = test_config("test-secret");
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let pair = encoder
            .generate_token_pair(&test_user(), Uuid::new_v4())
            .unwrap();

        assert_eq!(
            decoder.decode_access_token(&pair.refresh_token),
            Err(TokenError::WrongKind)
        );
        assert_eq!(
            decoder.decode_refresh_token(&pair.access_token),
            Err(TokenError::WrongKind)
        );
    }

    #[test]
    fn wrong_key_is_a_signature_failure() {
        let encoder = JwtEncoder::new(&test_config("key-one"));
        let decoder = JwtDecoder::new(&test_config("key-two"));
        let pair = encoder
            .generate_token_pair(&test_user(), Uuid::new_v4())
            .unwrap();

        assert_eq!(
            decoder.decode_access_token(&pair.access_token),
            Err(TokenError::SignatureInvalid)
        );
    }

    #[test]
    fn garbage_input_is_malformed() {
        let decoder = JwtDecoder::new(&test_config("test-secret"));
        assert_eq!(
            decoder.decode_access_token("not-a-token"),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config("test-secret");
        let decoder = JwtDecoder::new(&config);
        let user = test_user();

        // Sign an already-expired access token with the same key.
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            sid: Uuid::new_v4(),
            roles: user.roles.clone(),
            username: user.username.clone(),
            iat: (now - chrono::Duration::hours(2)).timestamp(),
            exp: (now - chrono::Duration::hours(1)).timestamp(),
            jti: Uuid::new_v4(),
            kind: TokenKind::Access,
        };
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &jsonwebtoken::EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert_eq!(
            decoder.decode_access_token(&token),
            Err(TokenError::Expired)
        );
    }
}
