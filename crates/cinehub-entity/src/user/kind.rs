//! Numeric user kind.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The platform's numeric "user kind" (employee category).
///
/// Kind values are platform configuration, not code — routes reference them
/// by number, so this stays a transparent numeric newtype rather than an
/// enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserKind(pub i32);

impl UserKind {
    /// Return the raw numeric value.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for UserKind {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
