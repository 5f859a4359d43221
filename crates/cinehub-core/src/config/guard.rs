//! Guard decision configuration.

use serde::{Deserialize, Serialize};

/// Settings consumed by the guard orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Path of the login page.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Path of the home page.
    #[serde(default = "default_home_path")]
    pub home_path: String,
    /// Landing route used when no remembered path and no reachable menu
    /// route exists after login.
    #[serde(default = "default_landing")]
    pub default_landing: String,
    /// How long a remembered return path is kept, in seconds.
    #[serde(default = "default_return_path_ttl")]
    pub return_path_ttl_seconds: u64,
    /// TOML file holding the route tree and menu tree.
    #[serde(default = "default_routes_file")]
    pub routes_file: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            home_path: default_home_path(),
            default_landing: default_landing(),
            return_path_ttl_seconds: default_return_path_ttl(),
            routes_file: default_routes_file(),
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_landing() -> String {
    "/movie".to_string()
}

fn default_return_path_ttl() -> u64 {
    3600
}

fn default_routes_file() -> String {
    "config/routes.toml".to_string()
}
