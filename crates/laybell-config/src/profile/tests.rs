//! Tests for profile loading, merging, and derivation.

use super::*;
use crate::schema::ParamValue;
use laybell_common::ConfigError;
use proptest::prelude::*;
use std::collections::BTreeMap;

const SOURCE: &str = r#"
[default]
vial_diameter = 16.0
vial_height = 38.5
label_width = 40.0
frame_length = 200.0

[profiles.22mm]
vial_diameter = 22.0
vial_height = 50.0
label_width = 55.0
frame_length = 240.0

[profiles.wide]
peel_channel_width = 60.0
cradle_length = 50.0
"#;

#[test]
fn load_without_profile_uses_base() {
    let cfg = load_from_str(SOURCE, None).unwrap();
    assert_eq!(cfg.number("vial_diameter"), Some(16.0));
    assert_eq!(cfg.number("frame_length"), Some(200.0));
}

#[test]
fn profile_values_win() {
    let cfg = load_from_str(SOURCE, Some("22mm")).unwrap();
    assert_eq!(cfg.number("vial_diameter"), Some(22.0));
    assert_eq!(cfg.number("vial_height"), Some(50.0));
    assert_eq!(cfg.number("label_width"), Some(55.0));
    assert_eq!(cfg.number("frame_length"), Some(240.0));
}

#[test]
fn derived_values_follow_the_profile() {
    let cfg = load_from_str(SOURCE, Some("22mm")).unwrap();
    assert_eq!(cfg.number("peel_channel_width"), Some(56.0));
    assert_eq!(cfg.number("cradle_base_width"), Some(42.0));
    assert_eq!(cfg.number("cradle_length"), Some(41.0));
}

#[test]
fn profile_can_short_circuit_derivation() {
    let cfg = load_from_str(SOURCE, Some("wide")).unwrap();
    assert_eq!(cfg.number("peel_channel_width"), Some(60.0));
    assert_eq!(cfg.number("cradle_length"), Some(50.0));
    // Not overridden, still derived.
    assert_eq!(cfg.number("cradle_base_width"), Some(36.0));
}

#[test]
fn base_can_short_circuit_derivation() {
    let source = "[default]\nlabel_width = 40.0\npeel_channel_width = 44.0\n";
    let cfg = load_from_str(source, None).unwrap();
    assert_eq!(cfg.number("peel_channel_width"), Some(44.0));
}

#[test]
fn unknown_profile_lists_available() {
    let err = load_from_str(SOURCE, Some("nonexistent")).unwrap_err();
    match &err {
        ConfigError::UnknownProfile { name, available } => {
            assert_eq!(name, "nonexistent");
            assert_eq!(available, &vec!["22mm".to_string(), "wide".to_string()]);
        }
        other => panic!("expected UnknownProfile, got {other:?}"),
    }
    assert!(err.to_string().contains("Unknown profile 'nonexistent'"));
    assert!(err.to_string().contains("22mm, wide"));
}

#[test]
fn unknown_profile_with_no_profiles() {
    let err = load_from_str("[default]\nvial_diameter = 16.0\n", Some("22mm")).unwrap_err();
    assert!(err.to_string().ends_with("Available: (none)"));
}

#[test]
fn profile_lookup_is_case_sensitive() {
    let err = load_from_str(SOURCE, Some("22MM")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile { .. }));
}

#[test]
fn store_rereads_file_on_every_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SOURCE).unwrap();
    let store = ProfileStore::new(&path);

    let first = store.load(None).unwrap();
    assert_eq!(first.number("vial_diameter"), Some(16.0));

    let edited = SOURCE.replace("vial_diameter = 16.0", "vial_diameter = 18.0");
    std::fs::write(&path, edited).unwrap();
    let second = store.load(None).unwrap();
    assert_eq!(second.number("vial_diameter"), Some(18.0));
}

#[test]
fn store_loads_are_independent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SOURCE).unwrap();
    let store = ProfileStore::new(&path);

    let mut a = store.load(None).unwrap();
    let b = store.load(None).unwrap();
    assert_eq!(a, b);

    a.set_number("vial_diameter", -1.0);
    a.remove("label_width");
    assert_eq!(b.number("vial_diameter"), Some(16.0));
    assert_eq!(b.number("label_width"), Some(40.0));
}

#[test]
fn store_lists_profile_names() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SOURCE).unwrap();
    let names = ProfileStore::new(&path).profile_names().unwrap();
    assert_eq!(names, vec!["22mm".to_string(), "wide".to_string()]);
}

#[test]
fn store_missing_file_is_file_not_found() {
    let store = ProfileStore::new("/tmp/definitely/not/here/config.toml");
    assert!(matches!(
        store.load(None).unwrap_err(),
        ConfigError::FileNotFound(_)
    ));
}

#[test]
fn apply_profile_without_overrides_copies_base() {
    let mut base = BTreeMap::new();
    base.insert("vial_diameter".to_string(), ParamValue::Float(16.0));
    let cfg = apply_profile(&base, None);
    assert_eq!(cfg.as_map(), &base);
}

proptest! {
    #[test]
    fn override_always_wins(
        base in prop::collection::btree_map("[a-z]{1,6}", -1000.0f64..1000.0, 0..12),
        overrides in prop::collection::btree_map("[a-z]{1,6}", -1000.0f64..1000.0, 0..12),
    ) {
        let base: BTreeMap<String, ParamValue> =
            base.into_iter().map(|(k, v)| (k, ParamValue::Float(v))).collect();
        let overrides: BTreeMap<String, ParamValue> =
            overrides.into_iter().map(|(k, v)| (k, ParamValue::Float(v))).collect();

        let cfg = apply_profile(&base, Some(&overrides));
        for (key, value) in &overrides {
            prop_assert_eq!(cfg.get(key), Some(value));
        }
        for (key, value) in &base {
            if !overrides.contains_key(key) {
                prop_assert_eq!(cfg.get(key), Some(value));
            }
        }
    }
}
