//! Core TOML source parsing: `[default]` plus optional `[profiles.<name>]`.

use crate::schema::ParamValue;
use laybell_common::ConfigError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

/// A parsed configuration source: the base tier and every profile override.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigSource {
    pub default: BTreeMap<String, ParamValue>,
    #[serde(default)]
    pub profiles: BTreeMap<String, BTreeMap<String, ParamValue>>,
}

impl ConfigSource {
    /// Profile names in sorted order.
    pub fn profile_names(&self) -> Vec<String> {
        self.profiles.keys().cloned().collect()
    }
}

/// Parse TOML text into a [`ConfigSource`].
///
/// A missing `[default]` table, a non-table profile, or a nested table inside
/// either tier is a parse error.
pub fn parse_source(content: &str) -> Result<ConfigSource, ConfigError> {
    let source: ConfigSource = toml::from_str(content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    debug!(
        base_keys = source.default.len(),
        profiles = source.profiles.len(),
        "parsed config source"
    );
    Ok(source)
}

/// Read and parse the source at `path`.
pub fn load_source(path: &Path) -> Result<ConfigSource, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let source = parse_source(&content)?;
    info!("loaded config from {}", path.display());
    Ok(source)
}
