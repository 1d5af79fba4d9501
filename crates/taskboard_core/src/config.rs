//! Board runtime configuration.
//!
//! # Responsibility
//! - Hold the tunables that are not part of any record: store latency and
//!   the calendar week convention.
//! - Parse them from JSON with every field optional.
//!
//! # Invariants
//! - Missing fields fall back to [`BoardConfig::default`].

use crate::projection::timeline::WeekStart;
use crate::store::LatencyProfile;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration parse failure.
#[derive(Debug)]
pub enum ConfigError {
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid board config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Runtime configuration for stores and timeline views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Simulated storage round-trip per operation.
    pub latency: LatencyProfile,
    /// First day of the timeline week.
    pub week_start: WeekStart,
}

impl BoardConfig {
    /// Configuration without simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: LatencyProfile::instant(),
            ..Self::default()
        }
    }

    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
