//! Profile application and merging.

use super::types::ProfileOverrides;
use crate::schema::Configuration;

/// Build a configuration from a base tier with optional overrides applied on top.
///
/// Every key defined by `overrides` replaces or extends the base value.
pub fn apply_profile(
    base: &ProfileOverrides,
    overrides: Option<&ProfileOverrides>,
) -> Configuration {
    let mut cfg = Configuration::from(base.clone());
    if let Some(overrides) = overrides {
        cfg.merge(overrides);
    }
    cfg
}
