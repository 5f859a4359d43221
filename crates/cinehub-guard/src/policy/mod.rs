pub mod evaluator;

pub use evaluator::{evaluate, normalize_codes, strip_role_prefix};
