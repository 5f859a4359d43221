//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Navigation state reported by the admin panel for one guard decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideRequest {
    /// Opaque client identifier (stable per browser session).
    pub client_id: String,
    /// The navigated path, without query string.
    pub path: String,
    /// Query string, without the leading `?`.
    #[serde(default)]
    pub query: Option<String>,
    /// Whether the auth subsystem considers the client authenticated.
    #[serde(default)]
    pub is_authenticated: bool,
    /// Whether the client explicitly logged out.
    #[serde(default)]
    pub is_logged_out: bool,
    /// Whether the profile fetch is still in flight.
    #[serde(default)]
    pub profile_loading: bool,
}

/// Logout notification: forget everything about a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetRequest {
    /// Opaque client identifier.
    pub client_id: String,
}
