//! Per-client guard lifecycle state.

use dashmap::DashMap;

use cinehub_entity::decision::GuardState;

/// Tracks each client's `Initializing → Ready` transition.
///
/// The transition is sticky: once a client has been observed with the
/// auth-loading signal clear, it stays `Ready` even if a later profile
/// refresh raises the signal again.
#[derive(Debug, Default)]
pub struct GuardSessions {
    /// Client key → last known state.
    states: DashMap<String, GuardState>,
}

impl GuardSessions {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            states: DashMap::new(),
        }
    }

    /// Record a loading observation and return the client's current state.
    pub fn observe(&self, client_key: &str, loading: bool) -> GuardState {
        if let Some(state) = self.states.get(client_key) {
            if *state == GuardState::Ready {
                return GuardState::Ready;
            }
        }
        let state = if loading {
            GuardState::Initializing
        } else {
            GuardState::Ready
        };
        self.states.insert(client_key.to_string(), state);
        state
    }

    /// Forget a client entirely (e.g. on logout).
    pub fn forget(&self, client_key: &str) {
        self.states.remove(client_key);
    }
}
