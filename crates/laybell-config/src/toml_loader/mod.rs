//! TOML config source loading, path resolution, and default file creation.

mod loader;
mod paths;
mod template;

#[cfg(test)]
mod tests;

pub use loader::{load_source, parse_source, ConfigSource};
pub use paths::{create_default_config, resolve_config_path, CONFIG_ENV_VAR};
pub use template::default_config_toml;
