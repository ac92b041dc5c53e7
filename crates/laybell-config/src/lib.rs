//! Vial label applicator configuration system.
//!
//! Loads the shared parametric dimensions from `config.toml`, applies an
//! optional named profile, computes derived values, and validates the result.
//! Every load returns a fresh, independently owned [`Configuration`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use laybell_config::{load_config, validation};
//!
//! let cfg = load_config(Some("22mm")).expect("failed to load config");
//! validation::validate(&cfg).expect("invalid dimensions");
//! println!("vial: {:?}mm", cfg.number("vial_diameter"));
//! ```

pub mod derive;
pub mod profile;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

// Re-export core types for convenience
pub use profile::{load_from_str, ProfileStore};
pub use schema::{Configuration, ParamValue};
pub use toml_writer::save_resolved_config;

use laybell_common::ConfigError;

/// Load the project config, applying `profile` when given.
///
/// The source is located with [`toml_loader::resolve_config_path`].
pub fn load_config(profile: Option<&str>) -> Result<Configuration, ConfigError> {
    ProfileStore::discover().load(profile)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(cfg: &Configuration) -> String {
    serde_json::to_string_pretty(cfg)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
