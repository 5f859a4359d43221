//! First-match route resolution over the normalized tree.
//!
//! The tree is flattened in depth-first pre-order at build time (a node's
//! own path before its children, siblings in declared order), so resolution
//! is a linear first-match scan with matchers compiled exactly once.

use cinehub_entity::route::{RoutePage, RouteTree};

use cinehub_core::error::AppError;

use super::matcher::PathMatcher;

/// One navigable page with its compiled matcher.
#[derive(Debug, Clone)]
struct TableEntry {
    /// Compiled template matcher.
    matcher: PathMatcher,
    /// The page the template belongs to.
    page: RoutePage,
}

/// Compiled lookup table over the route tree. Built once at startup,
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Pages in resolution order.
    entries: Vec<TableEntry>,
}

impl RouteTable {
    /// Compile every page of the tree into a resolution table.
    pub fn build(tree: &RouteTree) -> Result<Self, AppError> {
        let mut entries = Vec::new();
        for node in tree.iter() {
            if let Some(page) = node.page() {
                entries.push(TableEntry {
                    matcher: PathMatcher::compile(&page.path)?,
                    page: page.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Find the page whose template matches the navigated path.
    ///
    /// Returns `None` when no template matches — the caller must treat
    /// that as "no access rule found", not as an error.
    pub fn resolve(&self, path: &str) -> Option<&RoutePage> {
        self.entries
            .iter()
            .find(|entry| entry.matcher.matches(path))
            .map(|entry| &entry.page)
    }

    /// Number of navigable pages in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinehub_entity::route::RawRouteNode;

    fn node(name: &str, path: &str, children: Vec<RawRouteNode>) -> RawRouteNode {
        RawRouteNode {
            name: name.to_string(),
            path: Some(path.to_string()),
            auth: true,
            permission_code: None,
            required_kind: None,
            exclude_kind: Vec::new(),
            separate: false,
            children,
        }
    }

    #[test]
    fn test_own_path_resolves_before_children() {
        let tree = RouteTree::from_raw(vec![node(
            "movies",
            "/movie/:id",
            vec![node("movie-comments", "/movie/:id", vec![])],
        )])
        .unwrap();
        let table = RouteTable::build(&tree).unwrap();

        let page = table.resolve("/movie/7").unwrap();
        assert_eq!(page.path, "/movie/:id");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_unmatched_path_is_none() {
        let tree = RouteTree::from_raw(vec![node("movies", "/movie", vec![])]).unwrap();
        let table = RouteTable::build(&tree).unwrap();
        assert!(table.resolve("/person").is_none());
    }

    #[test]
    fn test_declared_sibling_order_wins() {
        let tree = RouteTree::from_raw(vec![
            node("create", "/movie/create", vec![]),
            node("detail", "/movie/:id", vec![]),
        ])
        .unwrap();
        let table = RouteTable::build(&tree).unwrap();

        // "/movie/create" matches both templates; the declared-first one wins.
        assert_eq!(table.resolve("/movie/create").unwrap().path, "/movie/create");
        assert_eq!(table.resolve("/movie/9").unwrap().path, "/movie/:id");
    }
}
