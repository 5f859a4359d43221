//! `MaybeAuthUser` extractor — pulls the optional JWT from the
//! Authorization header and derives the guard's user context.
//!
//! The guard must answer for anonymous clients too, so a missing or
//! invalid token is not a rejection: it degrades to "no profile", exactly
//! as an upstream profile-fetch failure would.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use cinehub_entity::user::UserContext;

use crate::state::AppState;

/// Extracted (possibly anonymous) caller identity available in handlers.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser {
    /// Whether an Authorization bearer token was presented at all.
    pub token_present: bool,
    /// The decoded user context, when the token was valid.
    pub user: Option<UserContext>,
}

impl MaybeAuthUser {
    /// Permission codes held by the caller; empty when anonymous.
    pub fn held_codes(&self) -> &[String] {
        self.user
            .as_ref()
            .map(|u| u.permission_codes.as_slice())
            .unwrap_or(&[])
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Ok(Self {
                token_present: false,
                user: None,
            });
        };

        let user = match state.jwt_decoder.decode_access_token(token) {
            Ok(claims) => Some(claims.user_context()),
            Err(err) => {
                tracing::debug!(error = %err, "Presented token rejected; treating as anonymous");
                None
            }
        };

        Ok(Self {
            token_present: true,
            user,
        })
    }
}
