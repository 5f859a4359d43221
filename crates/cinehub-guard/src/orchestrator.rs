//! The guard orchestrator.
//!
//! Ties route resolution, the permission evaluator, the menu filter, and
//! the return-path store together into one decision per navigation event.
//! Every check is local; evaluations are idempotent given their inputs, so
//! superseded ones are simply discarded when the inputs change again.

use std::sync::Arc;

use tracing::debug;

use cinehub_core::config::guard::GuardConfig;
use cinehub_core::error::AppError;
use cinehub_core::traits::store::ReturnPathStore;
use cinehub_entity::decision::{GuardAction, GuardOutcome, GuardState};
use cinehub_entity::menu::MenuNode;
use cinehub_entity::route::RouteTree;
use cinehub_entity::user::UserContext;

use crate::menu::first_reachable_route;
use crate::policy::evaluate;
use crate::route::RouteTable;
use crate::sessions::GuardSessions;

/// The navigation and auth state the admin panel reports for one
/// evaluation. Supplied by the caller; the orchestrator never fetches
/// anything itself.
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// The navigated path, without query string.
    pub path: String,
    /// Query string, without the leading `?`.
    pub query: Option<String>,
    /// Whether the client holds an access token.
    pub has_token: bool,
    /// Whether the auth subsystem considers the client authenticated.
    pub is_authenticated: bool,
    /// Whether the client explicitly logged out.
    pub is_logged_out: bool,
    /// Whether the profile fetch is still in flight.
    pub profile_loading: bool,
}

/// Decides render-vs-redirect-vs-unauthorized per navigation event.
#[derive(Debug)]
pub struct GuardOrchestrator {
    /// Compiled route resolution table.
    table: RouteTable,
    /// The sidebar menu tree, for post-login landing.
    menu: Vec<MenuNode>,
    /// Paths and timing settings.
    config: GuardConfig,
    /// Per-client lifecycle states.
    sessions: GuardSessions,
    /// Remembered paths for post-login return.
    store: Arc<dyn ReturnPathStore>,
}

impl GuardOrchestrator {
    /// Build an orchestrator over a validated route tree and menu tree.
    pub fn new(
        tree: &RouteTree,
        menu: Vec<MenuNode>,
        config: GuardConfig,
        store: Arc<dyn ReturnPathStore>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            table: RouteTable::build(tree)?,
            menu,
            config,
            sessions: GuardSessions::new(),
            store,
        })
    }

    /// The compiled route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The menu tree.
    pub fn menu(&self) -> &[MenuNode] {
        &self.menu
    }

    /// Drop everything known about a client (on logout): its guard state
    /// and any remembered return path.
    pub async fn reset_client(&self, client_key: &str) -> Result<(), AppError> {
        self.sessions.forget(client_key);
        self.store.clear(client_key).await
    }

    /// Evaluate one navigation event for a client.
    ///
    /// Rows of the decision table are tried in order; the first match wins.
    /// An unmatched path means "no access rule found" and falls through to
    /// rendering.
    pub async fn decide(
        &self,
        client_key: &str,
        nav: &NavigationState,
        user: Option<&UserContext>,
    ) -> Result<GuardOutcome, AppError> {
        let state = self.sessions.observe(client_key, nav.profile_loading);
        let route = self.table.resolve(&nav.path);
        let busy = state == GuardState::Initializing || nav.profile_loading;

        // Public page: render unconditionally, skip every other check.
        if let Some(page) = route {
            if !page.rules.auth {
                return Ok(GuardOutcome {
                    action: GuardAction::Render,
                    show_overlay: false,
                    state,
                });
            }
        }

        // Unauthenticated on a protected path: bounce to login, remembering
        // where the client was headed (unless it was just the home page).
        if !nav.has_token
            && !nav.is_authenticated
            && !nav.is_logged_out
            && nav.path != self.config.login_path
        {
            if nav.path != self.config.home_path {
                let remembered = match &nav.query {
                    Some(query) if !query.is_empty() => format!("{}?{query}", nav.path),
                    _ => nav.path.clone(),
                };
                self.store.set(client_key, &remembered).await?;
                debug!(client = client_key, path = %remembered, "Remembered return path");
            }
            return Ok(GuardOutcome {
                action: GuardAction::RedirectToLogin,
                show_overlay: true,
                state,
            });
        }

        // Authenticated client on home or login: forward to the remembered
        // path, else the first reachable menu route, else the default
        // landing.
        if nav.is_authenticated
            && (nav.path == self.config.home_path || nav.path == self.config.login_path)
        {
            let remembered = self.store.get(client_key).await?;
            let target = match remembered {
                Some(path) => path,
                None => {
                    let held = user.map(|u| u.permission_codes.as_slice()).unwrap_or(&[]);
                    first_reachable_route(&self.menu, held)
                        .unwrap_or_else(|| self.config.default_landing.clone())
                }
            };
            self.store.clear(client_key).await?;
            debug!(client = client_key, %target, "Post-login redirect");
            return Ok(GuardOutcome {
                action: GuardAction::Redirect { target },
                show_overlay: true,
                state,
            });
        }

        // Permission check, only once the profile has loaded and only for
        // pages that declare a permission requirement. An absent profile is
        // indistinguishable from an empty one: denied, never an error.
        if nav.is_authenticated && state == GuardState::Ready {
            if let Some(page) = route {
                if page.rules.permission_codes.is_some() {
                    let granted = user
                        .map(|u| evaluate(&page.rules, &nav.path, u).is_granted())
                        .unwrap_or(false);
                    if !granted {
                        debug!(client = client_key, path = %nav.path, "Access denied");
                        return Ok(GuardOutcome {
                            action: GuardAction::Unauthorized,
                            show_overlay: busy,
                            state,
                        });
                    }
                }
            }
        }

        Ok(GuardOutcome {
            action: GuardAction::Render,
            show_overlay: busy,
            state,
        })
    }
}
