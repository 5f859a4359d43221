//! # cinehub-guard
//!
//! The CineHub admin panel's access-decision core.
//!
//! ## Modules
//!
//! - `route` — path-template matching and first-match route resolution
//! - `policy` — the pure permission evaluator
//! - `menu` — sidebar filtering and first-reachable-route resolution
//! - `orchestrator` — the per-navigation guard decision machine
//! - `sessions` — per-client guard lifecycle state
//! - `jwt` — access-token claims and validation
//! - `store` — in-memory return-path store

pub mod jwt;
pub mod menu;
pub mod orchestrator;
pub mod policy;
pub mod route;
pub mod sessions;
pub mod store;

pub use jwt::{Claims, JwtDecoder};
pub use menu::{filter_menu, first_reachable_route, first_route};
pub use orchestrator::{GuardOrchestrator, NavigationState};
pub use policy::evaluate;
pub use route::{PathMatcher, RouteTable};
pub use sessions::GuardSessions;
pub use store::MemoryReturnPathStore;
