//! Default config source shipped with the workspace.

/// The workspace `config.toml`, embedded at compile time.
pub fn default_config_toml() -> &'static str {
    include_str!("../../../../config.toml")
}
