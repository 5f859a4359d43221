//! Access-token claims issued by the external auth subsystem.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cinehub_entity::user::UserContext;

/// JWT claims payload embedded in every admin-panel access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user ID.
    pub sub: Uuid,
    /// Username for convenience.
    pub username: String,
    /// The user's numeric kind.
    pub kind: i32,
    /// Granted authorities, possibly `ROLE_`-prefixed.
    pub authorities: Vec<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// JWT ID.
    pub jti: Uuid,
    /// Token type: "access" or "refresh".
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens. The guard only ever
/// accepts access tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived access token for API requests.
    Access,
    /// Long-lived refresh token for obtaining new access tokens.
    Refresh,
}

impl Claims {
    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Derive the guard's user context from the claims.
    pub fn user_context(&self) -> UserContext {
        UserContext::new(self.kind, self.authorities.clone())
    }
}
