//! Profile store: loads the base tier, applies a named profile, derives values.

use super::apply::apply_profile;
use crate::derive;
use crate::schema::Configuration;
use crate::toml_loader::{self, ConfigSource};
use laybell_common::ConfigError;
use std::path::PathBuf;
use tracing::{info, warn};

/// Loads configurations from a TOML source on disk.
///
/// Holds only the path; the file is re-read on every [`load`](Self::load),
/// so edits between calls are always picked up.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by the resolved project `config.toml`.
    pub fn discover() -> Self {
        Self::new(toml_loader::resolve_config_path())
    }

    /// Load the base configuration, optionally overridden by `profile`.
    pub fn load(&self, profile: Option<&str>) -> Result<Configuration, ConfigError> {
        let source = toml_loader::load_source(&self.path)?;
        resolve(&source, profile)
    }

    /// Every profile name the source defines, sorted.
    pub fn profile_names(&self) -> Result<Vec<String>, ConfigError> {
        Ok(toml_loader::load_source(&self.path)?.profile_names())
    }
}

/// Same as [`ProfileStore::load`] over in-memory TOML text.
pub fn load_from_str(content: &str, profile: Option<&str>) -> Result<Configuration, ConfigError> {
    let source = toml_loader::parse_source(content)?;
    resolve(&source, profile)
}

fn resolve(source: &ConfigSource, profile: Option<&str>) -> Result<Configuration, ConfigError> {
    let overrides = match profile {
        None => None,
        Some(name) => Some(source.profiles.get(name).ok_or_else(|| {
            ConfigError::UnknownProfile {
                name: name.to_string(),
                available: source.profile_names(),
            }
        })?),
    };

    let mut cfg = apply_profile(&source.default, overrides);
    derive::apply_derived(&mut cfg)?;
    if cfg.is_empty() {
        warn!("configuration source defines no parameters");
    }

    info!(
        profile = profile.unwrap_or("default"),
        keys = cfg.len(),
        "resolved configuration"
    );
    Ok(cfg)
}
