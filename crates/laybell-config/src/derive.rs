//! Derived configuration values.
//!
//! Each [`DerivedRule`] computes one key from other keys. Rules run in
//! dependency order, so a rule may read a key produced by another rule.
//! A rule never overwrites a key that is already present, which lets a
//! base or profile value short-circuit the formula.

use crate::schema::Configuration;
use laybell_common::ConfigError;
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use tracing::debug;

/// Clearance added to `label_width` when `peel_channel_width_clearance` is unset.
pub const DEFAULT_PEEL_CHANNEL_CLEARANCE: f64 = 1.0;

/// One derived key and the formula producing it.
#[derive(Clone, Copy)]
pub struct DerivedRule {
    pub key: &'static str,
    /// Keys the formula reads. Used only for ordering.
    pub inputs: &'static [&'static str],
    /// Returns `None` when an input is absent or non-numeric.
    pub formula: fn(&Configuration) -> Option<f64>,
}

impl fmt::Debug for DerivedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedRule")
            .field("key", &self.key)
            .field("inputs", &self.inputs)
            .finish_non_exhaustive()
    }
}

/// Every derived key the loader computes.
pub static DERIVED_RULES: &[DerivedRule] = &[
    DerivedRule {
        key: "peel_channel_width",
        inputs: &["label_width", "peel_channel_width_clearance"],
        formula: peel_channel_width,
    },
    DerivedRule {
        key: "cradle_base_width",
        inputs: &["vial_diameter"],
        formula: cradle_base_width,
    },
    DerivedRule {
        key: "cradle_length",
        inputs: &["vial_diameter"],
        formula: cradle_length,
    },
];

fn peel_channel_width(cfg: &Configuration) -> Option<f64> {
    let clearance = match cfg.get("peel_channel_width_clearance") {
        None => DEFAULT_PEEL_CHANNEL_CLEARANCE,
        Some(value) => value.as_f64()?,
    };
    Some(cfg.number("label_width")? + clearance)
}

fn cradle_base_width(cfg: &Configuration) -> Option<f64> {
    Some(cfg.number("vial_diameter")? + 20.0)
}

fn cradle_length(cfg: &Configuration) -> Option<f64> {
    Some(cfg.number("vial_diameter")? + 19.0)
}

/// Sort `rules` so every rule runs after the rules producing its inputs.
///
/// Ties keep table order. Fails with `DerivationCycle` naming the keys that
/// could not be ordered.
pub fn evaluation_order(rules: &[DerivedRule]) -> Result<Vec<&DerivedRule>, ConfigError> {
    let index: BTreeMap<&str, usize> = rules
        .iter()
        .enumerate()
        .map(|(i, rule)| (rule.key, i))
        .collect();

    let mut indegree = vec![0usize; rules.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); rules.len()];
    for (i, rule) in rules.iter().enumerate() {
        for input in rule.inputs {
            if let Some(&producer) = index.get(input) {
                indegree[i] += 1;
                dependents[producer].push(i);
            }
        }
    }

    let mut ready: VecDeque<usize> = (0..rules.len()).filter(|&i| indegree[i] == 0).collect();
    let mut order = Vec::with_capacity(rules.len());
    while let Some(i) = ready.pop_front() {
        order.push(&rules[i]);
        for &next in &dependents[i] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                ready.push_back(next);
            }
        }
    }

    if order.len() < rules.len() {
        let stuck = rules
            .iter()
            .enumerate()
            .filter(|(i, _)| indegree[*i] > 0)
            .map(|(_, r)| r.key.to_string())
            .collect();
        return Err(ConfigError::DerivationCycle(stuck));
    }
    Ok(order)
}

/// Fill in every derived key that `cfg` does not already define.
pub fn apply_derived(cfg: &mut Configuration) -> Result<(), ConfigError> {
    apply_rules(cfg, DERIVED_RULES)
}

/// Run `rules` against `cfg` in dependency order.
pub fn apply_rules(cfg: &mut Configuration, rules: &[DerivedRule]) -> Result<(), ConfigError> {
    for rule in evaluation_order(rules)? {
        if cfg.contains_key(rule.key) {
            debug!(key = rule.key, "derived key set explicitly, keeping it");
            continue;
        }
        match (rule.formula)(cfg) {
            Some(value) => {
                cfg.set_number(rule.key, value);
            }
            None => debug!(key = rule.key, "inputs missing or non-numeric, not derived"),
        }
    }
    Ok(())
}
