//! Result document wrapper selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape that search hits are wrapped in when handed back to callers.
///
/// Unset by default; consumers fall back to their own item type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentWrapper {
    /// Typed item with accessor-style field access.
    Item,
    /// Plain key/value map of the `_source` document.
    Map,
    /// Application-defined wrapper, referenced by name.
    Custom(String),
}

impl fmt::Display for DocumentWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item => f.write_str("item"),
            Self::Map => f.write_str("map"),
            Self::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}
