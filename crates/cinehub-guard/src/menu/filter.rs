//! Sidebar menu filtering and first-reachable-route resolution.
//!
//! This is a coarser check than the route evaluator: plain AND over each
//! node's permission codes, with no kind or `separate` logic. The two
//! policies intentionally diverge — unifying them would change which
//! landing route is computed after login.

use std::collections::HashSet;

use cinehub_entity::menu::MenuNode;

use crate::policy::normalize_codes;

/// Prune menu entries the user cannot see.
///
/// Children are filtered first; a node survives if it has surviving
/// children, declares no permission restriction, or the user holds every
/// declared code.
pub fn filter_menu(nodes: &[MenuNode], held_codes: &[String]) -> Vec<MenuNode> {
    let held = normalize_codes(held_codes);
    filter_nodes(nodes, &held)
}

fn filter_nodes(nodes: &[MenuNode], held: &HashSet<&str>) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_nodes(&node.children, held);
            let visible = node.is_unrestricted()
                || node
                    .permission_code
                    .iter()
                    .all(|code| held.contains(code.as_str()));
            if visible || !children.is_empty() {
                Some(MenuNode {
                    label: node.label.clone(),
                    path: node.path.clone(),
                    permission_code: node.permission_code.clone(),
                    children,
                })
            } else {
                None
            }
        })
        .collect()
}

/// First path in the tree, depth-first pre-order: a node's own path is
/// considered before its children's.
pub fn first_route(nodes: &[MenuNode]) -> Option<String> {
    for node in nodes {
        if let Some(path) = &node.path {
            if !path.is_empty() {
                return Some(path.clone());
            }
        }
        if let Some(path) = first_route(&node.children) {
            return Some(path);
        }
    }
    None
}

/// The first path the user may see — the post-login landing target.
pub fn first_reachable_route(nodes: &[MenuNode], held_codes: &[String]) -> Option<String> {
    first_route(&filter_menu(nodes, held_codes))
}
