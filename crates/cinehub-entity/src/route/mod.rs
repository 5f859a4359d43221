pub mod model;
pub mod tree;

pub use model::{RouteKind, RouteNode, RoutePage, RouteRules};
pub use tree::{RawRouteNode, RouteTree};
