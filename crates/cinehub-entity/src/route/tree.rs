//! Raw route configuration and load-time normalization.

use serde::{Deserialize, Serialize};

use cinehub_core::error::AppError;

use super::model::{RouteKind, RouteNode, RoutePage, RouteRules};
use crate::user::UserKind;

/// One node as declared in `routes.toml`, before normalization.
///
/// Nodes with a `path` become pages; nodes without one become namespaces.
/// Rule fields on a namespace are meaningless and rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRouteNode {
    /// Node label.
    pub name: String,
    /// URL template; absent for namespace nodes.
    #[serde(default)]
    pub path: Option<String>,
    /// Requires authentication unless explicitly `false`.
    #[serde(default = "default_auth")]
    pub auth: bool,
    /// Required permission codes. Absent and declared-empty are distinct:
    /// an absent list means "no permission requirement", an empty one
    /// denies everyone.
    #[serde(default)]
    pub permission_code: Option<Vec<String>>,
    /// Exact-match kind gate.
    #[serde(default)]
    pub required_kind: Option<i32>,
    /// Denylisted kinds.
    #[serde(default)]
    pub exclude_kind: Vec<i32>,
    /// Create/edit permission split.
    #[serde(default)]
    pub separate: bool,
    /// Child nodes, in declared order.
    #[serde(default)]
    pub children: Vec<RawRouteNode>,
}

fn default_auth() -> bool {
    true
}

/// The normalized, validated route tree. Built once at startup, read-only
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteTree {
    /// Root nodes, in declared order.
    pub roots: Vec<RouteNode>,
}

impl RouteTree {
    /// Normalize and validate raw configuration nodes.
    ///
    /// Fails fast on configuration errors instead of deferring them to
    /// evaluation time:
    /// - a `separate` page must declare exactly two permission codes
    ///   (`[create, edit]`),
    /// - rule fields on a namespace node (no `path`) are rejected.
    pub fn from_raw(raw: Vec<RawRouteNode>) -> Result<Self, AppError> {
        let mut roots = Vec::with_capacity(raw.len());
        for node in raw {
            roots.push(normalize_node(node)?);
        }
        Ok(Self { roots })
    }

    /// Iterate all nodes depth-first, each node before its children,
    /// siblings in declared order.
    pub fn iter(&self) -> impl Iterator<Item = &RouteNode> {
        let mut stack: Vec<&RouteNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }
}

fn normalize_node(raw: RawRouteNode) -> Result<RouteNode, AppError> {
    let kind = match raw.path {
        Some(path) => {
            let declared = raw.permission_code.as_deref().map_or(0, <[String]>::len);
            if raw.separate && declared != 2 {
                return Err(AppError::configuration(format!(
                    "Route '{}' ({path}) sets separate but declares {declared} permission \
                     codes; exactly two ([create, edit]) are required",
                    raw.name,
                )));
            }
            RouteKind::Page(RoutePage {
                path,
                rules: RouteRules {
                    auth: raw.auth,
                    permission_codes: raw.permission_code,
                    required_kind: raw.required_kind.map(UserKind),
                    exclude_kind: raw.exclude_kind.into_iter().map(UserKind).collect(),
                    separate: raw.separate,
                },
            })
        }
        None => {
            if raw.permission_code.is_some()
                || raw.required_kind.is_some()
                || !raw.exclude_kind.is_empty()
                || raw.separate
            {
                return Err(AppError::configuration(format!(
                    "Namespace node '{}' has no path but declares access rules",
                    raw.name
                )));
            }
            RouteKind::Group
        }
    };

    let mut children = Vec::with_capacity(raw.children.len());
    for child in raw.children {
        children.push(normalize_node(child)?);
    }

    Ok(RouteNode {
        name: raw.name,
        kind,
        children,
    })
}
