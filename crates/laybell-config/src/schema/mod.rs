//! Configuration value model.
//!
//! A [`Configuration`] is a flat, owned mapping from parameter name to
//! [`ParamValue`]. Every load produces a fresh instance, so callers may
//! mutate what they receive without affecting anyone else.

mod value;

pub use value::ParamValue;

use laybell_common::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat parameter mapping (millimeters and degrees).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, ParamValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Numeric value of `key`, or `None` if absent or non-numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.values.get(key).and_then(ParamValue::as_f64)
    }

    /// Numeric value of `key`, failing with `InvalidConfig` when it is
    /// absent, not a number, or not finite.
    pub fn require(&self, key: &str) -> Result<f64, ConfigError> {
        let issue = match self.values.get(key) {
            None => format!("Missing required key: {key}"),
            Some(value) => match value.as_f64() {
                Some(v) if v.is_finite() => return Ok(v),
                Some(v) => format!("{key}: expected finite number, got {v}"),
                None => format!("{key}: expected number, got {}", value.type_name()),
            },
        };
        Err(ConfigError::InvalidConfig(vec![issue]))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.values.insert(key.into(), value.into())
    }

    pub fn set_number(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), ParamValue::Float(value));
    }

    /// Insert only when `key` is not already present. Returns whether the
    /// value was inserted.
    pub fn set_if_absent(&mut self, key: &str, value: impl Into<ParamValue>) -> bool {
        if self.values.contains_key(key) {
            return false;
        }
        self.values.insert(key.to_string(), value.into());
        true
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.values.remove(key)
    }

    /// Overwrite or add every entry from `overrides`.
    pub fn merge(&mut self, overrides: &BTreeMap<String, ParamValue>) {
        for (key, value) in overrides {
            self.values.insert(key.clone(), value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, ParamValue> {
        &self.values
    }
}

impl From<BTreeMap<String, ParamValue>> for Configuration {
    fn from(values: BTreeMap<String, ParamValue>) -> Self {
        Self { values }
    }
}
