//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use cinehub_core::config::auth::AuthConfig;
use cinehub_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates access tokens presented by the admin panel.
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
        validation.leeway = config.jwt_leeway_seconds;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks:
    /// 1. Signature validity
    /// 2. Expiration
    /// 3. Token type is Access
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::unauthorized(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthorized("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            jwt_leeway_seconds: 0,
        }
    }

    fn claims(token_type: TokenType, exp_offset: i64) -> Claims {
        let now = Utc::now().timestamp();
        Claims {
            sub: Uuid::new_v4(),
            username: "editor".to_string(),
            kind: 1,
            authorities: vec!["ROLE_VIEW_MOVIE".to_string()],
            iat: now,
            exp: now + exp_offset,
            jti: Uuid::new_v4(),
            token_type,
        }
    }

    fn sign(claims: &Claims, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_valid_access_token() {
        let decoder = JwtDecoder::new(&config());
        let token = sign(&claims(TokenType::Access, 600), "test-secret");

        let decoded = decoder.decode_access_token(&token).unwrap();
        assert_eq!(decoded.username, "editor");
        assert_eq!(decoded.user_context().kind.value(), 1);
    }

    #[test]
    fn test_refresh_token_rejected() {
        let decoder = JwtDecoder::new(&config());
        let token = sign(&claims(TokenType::Refresh, 600), "test-secret");
        assert!(decoder.decode_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let decoder = JwtDecoder::new(&config());
        let token = sign(&claims(TokenType::Access, -600), "test-secret");
        assert!(decoder.decode_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let decoder = JwtDecoder::new(&config());
        let token = sign(&claims(TokenType::Access, 600), "other-secret");
        assert!(decoder.decode_access_token(&token).is_err());
    }
}
