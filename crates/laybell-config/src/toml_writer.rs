//! Write a resolved configuration back to TOML on disk.
//!
//! The output holds a single `[default]` table with every merged and derived
//! key, so it is itself a loadable source. Writes are atomic (write to
//! `.tmp`, then rename).

use std::path::Path;

use laybell_common::ConfigError;
use serde::Serialize;

use crate::schema::Configuration;

#[derive(Serialize)]
struct ResolvedSource<'a> {
    default: &'a Configuration,
}

/// Render a configuration as TOML text under `[default]`.
pub fn resolved_config_toml(cfg: &Configuration) -> Result<String, ConfigError> {
    toml::to_string_pretty(&ResolvedSource { default: cfg })
        .map_err(|e| ConfigError::WriteError(format!("failed to serialize config to TOML: {e}")))
}

/// Write a resolved configuration to `path`.
///
/// Creates parent directories if they don't exist.
pub fn save_resolved_config(cfg: &Configuration, path: &Path) -> Result<(), ConfigError> {
    let toml_str = resolved_config_toml(cfg)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        let fallback = std::fs::write(path, &toml_str);
        if let Err(e) = std::fs::remove_file(&tmp_path) {
            tracing::debug!("could not remove {}: {e}", tmp_path.display());
        }
        fallback.map_err(|e2| {
            ConfigError::WriteError(format!("failed to write config to {}: {e2}", path.display()))
        })?;
    }

    tracing::info!("wrote resolved config to {}", path.display());
    Ok(())
}
