//! Guard decision and state types.

use serde::{Deserialize, Serialize};

/// The permission evaluator's verdict. No partial-grant states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Access granted.
    Granted,
    /// Access denied.
    Denied,
}

impl AccessDecision {
    /// Whether access was granted.
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl From<bool> for AccessDecision {
    fn from(granted: bool) -> Self {
        if granted { Self::Granted } else { Self::Denied }
    }
}

/// Guard lifecycle state, per client.
///
/// `Initializing` persists until the upstream auth-loading signal first
/// clears; the transition to `Ready` is sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardState {
    /// Waiting for the auth subsystem to finish loading the profile.
    Initializing,
    /// Profile loading has completed at least once.
    Ready,
}

/// What the admin panel should do for the current navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuardAction {
    /// Render the requested page.
    Render,
    /// Redirect to the login page.
    RedirectToLogin,
    /// Redirect to the given target path.
    Redirect {
        /// Full target path, including any query string.
        target: String,
    },
    /// Show the unauthorized view in place of the page.
    Unauthorized,
}

/// The orchestrator's full answer for one navigation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardOutcome {
    /// The action to take.
    pub action: GuardAction,
    /// Whether the blocking loading overlay should be shown. While shown,
    /// the overlay takes interaction priority over the content.
    pub show_overlay: bool,
    /// The guard state after this evaluation.
    pub state: GuardState,
}
