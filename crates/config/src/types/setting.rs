//! Names of individually resettable settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// A single attribute of the configuration store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    Url,
    IndexName,
    Client,
    Logger,
    Pretty,
    Wrapper,
}

impl Setting {
    /// Every setting, in declaration order.
    pub const ALL: [Setting; 6] = [
        Self::Url,
        Self::IndexName,
        Self::Client,
        Self::Logger,
        Self::Pretty,
        Self::Wrapper,
    ];

    /// The snake_case name used in `Display`, `FromStr` and serde.
    pub fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::IndexName => "index_name",
            Self::Client => "client",
            Self::Logger => "logger",
            Self::Pretty => "pretty",
            Self::Wrapper => "wrapper",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Setting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|setting| setting.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownSetting(wanted.to_string()))
    }
}
