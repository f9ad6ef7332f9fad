//! HTTP client adapter selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the HTTP transport used to talk to the search service.
///
/// The store accepts any value without validation; the client crate decides
/// which adapters it can actually drive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClientAdapter {
    /// Built-in REST adapter backed by `reqwest`.
    #[default]
    Rest,
    /// Adapter provided by the embedding application, referenced by name.
    Custom(String),
}

impl ClientAdapter {
    /// Construct a named custom adapter.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom(name.into())
    }

    /// Whether this is the built-in REST adapter.
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }
}

impl fmt::Display for ClientAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rest => f.write_str("rest"),
            Self::Custom(name) => write!(f, "custom:{name}"),
        }
    }
}
