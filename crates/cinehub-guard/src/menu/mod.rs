pub mod filter;

pub use filter::{filter_menu, first_reachable_route, first_route};
