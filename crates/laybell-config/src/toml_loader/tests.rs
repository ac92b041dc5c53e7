//! Tests for TOML source loading, creation, and path resolution.

use super::*;
use crate::schema::ParamValue;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_source(Path::new("/tmp/nonexistent_laybell_config.toml"));
    assert!(matches!(
        result.unwrap_err(),
        laybell_common::ConfigError::FileNotFound(_)
    ));
}

#[test]
fn parse_default_and_profiles() {
    let source = parse_source(
        r#"
[default]
vial_diameter = 16.0
wall_count = 2

[profiles.22mm]
vial_diameter = 22.0
"#,
    )
    .unwrap();

    assert_eq!(source.default["vial_diameter"], ParamValue::Float(16.0));
    assert_eq!(source.default["wall_count"], ParamValue::Integer(2));
    assert_eq!(source.profile_names(), vec!["22mm".to_string()]);
    assert_eq!(
        source.profiles["22mm"]["vial_diameter"],
        ParamValue::Float(22.0)
    );
}

#[test]
fn profiles_section_is_optional() {
    let source = parse_source("[default]\nvial_diameter = 16.0\n").unwrap();
    assert!(source.profiles.is_empty());
    assert!(source.profile_names().is_empty());
}

#[test]
fn non_numeric_values_survive_parsing() {
    let source = parse_source(
        r#"
[default]
vial_diameter = "sixteen"
enabled = true
"#,
    )
    .unwrap();
    assert_eq!(
        source.default["vial_diameter"],
        ParamValue::Text("sixteen".into())
    );
    assert_eq!(source.default["enabled"], ParamValue::Bool(true));
}

#[test]
fn missing_default_section_is_parse_error() {
    let result = parse_source("[profiles.22mm]\nvial_diameter = 22.0\n");
    assert!(matches!(
        result.unwrap_err(),
        laybell_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn invalid_toml_is_parse_error() {
    let result = parse_source("this is not valid toml {{{");
    assert!(matches!(
        result.unwrap_err(),
        laybell_common::ConfigError::ParseError(_)
    ));
}

#[test]
fn load_source_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[default]\nlabel_width = 40.0\n").unwrap();

    let source = load_source(&path).unwrap();
    assert_eq!(source.default["label_width"], ParamValue::Float(40.0));
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("laybell").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let source = load_source(&path).unwrap();
    assert_eq!(source.default["vial_diameter"], ParamValue::Float(16.0));
    assert!(source.profiles.contains_key("22mm"));
}

#[test]
fn default_config_toml_is_valid() {
    let source = parse_source(default_config_toml()).unwrap();
    assert_eq!(source.default["frame_length"], ParamValue::Float(200.0));
}

#[test]
fn resolved_path_ends_with_config_toml() {
    let path = resolve_config_path();
    assert!(path.to_string_lossy().ends_with("config.toml"));
}
