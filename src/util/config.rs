//! Check configuration supplied by the host linter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration recognized by the reconciliation check.
///
/// Comes from the host's linter configuration; convoy never reads it
/// from disk itself. Unset options fall back to defaults, so an absent
/// or empty configuration object is always valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Explicitly acceptable ranges per dependency, in preference order.
    ///
    /// A dependency listed here is exempt from the dominant-range
    /// comparison as long as its declared range appears verbatim, and
    /// corrections for it are clamped to this list.
    pub allowed_dependency_versions: BTreeMap<String, Vec<String>>,
}

impl Config {
    /// Parse a configuration object from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Parse)
    }

    /// The allow-list for a dependency; empty when none is configured.
    pub fn allowed_versions(&self, dependency: &str) -> &[String] {
        self.allowed_dependency_versions
            .get(dependency)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Error at the configuration JSON boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse check configuration: {0}")]
    Parse(#[source] serde_json::Error),
}
