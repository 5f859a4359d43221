//! Normalized route tree model.
//!
//! The raw configuration allows heterogeneous nodes (a page with children,
//! a bare namespace, rule fields sprinkled anywhere). Normalization at load
//! time resolves every node into a [`RouteKind`] so traversal never has to
//! duck-type.

use serde::{Deserialize, Serialize};

use crate::user::UserKind;

/// Access rules attached to a navigable page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRules {
    /// Whether the page requires authentication. `false` marks a public
    /// page that skips every other check.
    pub auth: bool,
    /// Permission codes required to access the page. `None` means the page
    /// carries no permission requirement at all; a declared-empty list
    /// denies everyone (public pages use `auth = false` instead).
    pub permission_codes: Option<Vec<String>>,
    /// When set, the user's kind must equal this value exactly.
    pub required_kind: Option<UserKind>,
    /// Kinds that are always rejected, regardless of permissions held.
    pub exclude_kind: Vec<UserKind>,
    /// When true, `permission_codes` is a `[create, edit]` pair selected by
    /// the trailing path segment.
    pub separate: bool,
}

/// A navigable page: a path template plus its access rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePage {
    /// URL template with `:name` parameter segments.
    pub path: String,
    /// Access rules evaluated when the template matches.
    pub rules: RouteRules,
}

/// What a node in the normalized tree is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RouteKind {
    /// A navigable page with a path and rules.
    Page(RoutePage),
    /// A pure namespace grouping further nodes.
    Group,
}

/// One node of the normalized route tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteNode {
    /// Declared label of the node (not part of any path).
    pub name: String,
    /// Page or namespace.
    pub kind: RouteKind,
    /// Child nodes, in declared order.
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    /// Return the page data when this node is navigable.
    pub fn page(&self) -> Option<&RoutePage> {
        match &self.kind {
            RouteKind::Page(page) => Some(page),
            RouteKind::Group => None,
        }
    }
}
