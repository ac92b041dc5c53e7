//! Required-key presence and numeric type checks.

use super::REQUIRED_KEYS;
use crate::schema::Configuration;
use std::collections::BTreeMap;

/// Numeric values of every required key, produced by a clean structural pass.
#[derive(Debug, Clone)]
pub struct RequiredValues {
    values: BTreeMap<&'static str, f64>,
}

impl RequiredValues {
    /// Value of a required key. Keys outside `REQUIRED_KEYS` read as NaN,
    /// which fails no comparison.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(f64::NAN)
    }
}

/// Check presence, type and finiteness of every required key.
///
/// Missing keys are listed first, then type mismatches and non-finite
/// values, each in `REQUIRED_KEYS` order.
pub(crate) fn check_required(cfg: &Configuration) -> Result<RequiredValues, Vec<String>> {
    let mut errors = Vec::new();

    for key in REQUIRED_KEYS {
        if !cfg.contains_key(key) {
            errors.push(format!("Missing required key: {key}"));
        }
    }

    let mut values = BTreeMap::new();
    for key in REQUIRED_KEYS {
        if let Some(value) = cfg.get(key) {
            match value.as_f64() {
                Some(v) if v.is_finite() => {
                    values.insert(*key, v);
                }
                Some(v) => errors.push(format!("{key}: expected finite number, got {v}")),
                None => errors.push(format!(
                    "{key}: expected number, got {}",
                    value.type_name()
                )),
            }
        }
    }

    if errors.is_empty() {
        Ok(RequiredValues { values })
    } else {
        Err(errors)
    }
}
