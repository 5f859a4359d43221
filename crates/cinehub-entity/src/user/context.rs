//! Per-request user context.

use serde::{Deserialize, Serialize};

use super::kind::UserKind;

/// The authenticated user's attributes consumed by the guard.
///
/// Derived from the decoded access token by the auth boundary; the guard
/// core never fetches it itself. Replaced wholesale on token change, never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserContext {
    /// The user's numeric kind.
    pub kind: UserKind,
    /// Permission codes held by the user, as issued (possibly carrying a
    /// `ROLE_` prefix — normalization happens at evaluation time).
    pub permission_codes: Vec<String>,
}

impl UserContext {
    /// Create a context from a kind and raw permission codes.
    pub fn new(kind: impl Into<UserKind>, permission_codes: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            permission_codes,
        }
    }
}
