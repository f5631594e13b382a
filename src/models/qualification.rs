//! Qualification model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A certifiable skill (e.g., "FAA_11").
///
/// Opaque: only equality and set membership matter. Ordering exists so
/// qualification sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Qualification(String);

impl Qualification {
    /// Creates a qualification from its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Qualification {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Qualification {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for Qualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
