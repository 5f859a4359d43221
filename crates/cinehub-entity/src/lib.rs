//! # cinehub-entity
//!
//! Domain entity models for the CineHub admin guard.
//!
//! ## Modules
//!
//! - `route` — route tree definitions and load-time normalization
//! - `menu` — sidebar menu tree
//! - `user` — user kind and per-request user context
//! - `decision` — guard decision and state types

pub mod decision;
pub mod menu;
pub mod route;
pub mod user;

pub use decision::{AccessDecision, GuardAction, GuardOutcome, GuardState};
pub use menu::MenuNode;
pub use route::{RouteKind, RouteNode, RoutePage, RouteRules, RouteTree};
pub use user::{UserContext, UserKind};
