//! Config path resolution and default file creation.

use laybell_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

/// Environment variable that overrides every other config location.
pub const CONFIG_ENV_VAR: &str = "LAYBELL_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the path of the project `config.toml`.
///
/// Tries in order:
/// 1. the `LAYBELL_CONFIG` environment variable
/// 2. `config.toml` at the workspace root (two levels above this crate)
/// 3. `config.toml` in the current working directory
/// 4. `laybell/config.toml` in the platform config directory
///
/// The environment variable is returned as-is even if the file is missing.
/// When no candidate exists, the workspace-root path is returned so the
/// loader reports a meaningful `FileNotFound`.
pub fn resolve_config_path() -> PathBuf {
    if let Ok(p) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(p);
    }

    let workspace_root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(CONFIG_FILE_NAME);
    if workspace_root.exists() {
        return workspace_root;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("laybell").join(CONFIG_FILE_NAME);
        if user.exists() {
            return user;
        }
    }

    workspace_root
}

/// Write the default config source to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::WriteError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::WriteError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
