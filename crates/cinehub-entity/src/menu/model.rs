//! Sidebar menu tree.
//!
//! A separate tree from the route tree: it shares permission codes but is
//! only consulted for visibility and post-login landing, never for access
//! control.

use serde::{Deserialize, Serialize};

/// One entry in the navigation sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNode {
    /// Display label.
    pub label: String,
    /// Navigation target; absent for pure section headers.
    #[serde(default)]
    pub path: Option<String>,
    /// Permission codes required to see this entry. Empty = unrestricted.
    #[serde(default)]
    pub permission_code: Vec<String>,
    /// Child entries, in declared order.
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Whether this entry declares no permission restriction.
    pub fn is_unrestricted(&self) -> bool {
        self.permission_code.is_empty()
    }
}
