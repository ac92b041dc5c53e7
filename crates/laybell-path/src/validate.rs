//! Geometric checks over a waypoint sequence.
//!
//! Issues are returned as data; nothing here fails. The caller decides
//! whether a report with issues is fatal.

use crate::waypoint::{Waypoint, SEPARATION_WAYPOINT};
use laybell_common::ConfigError;
use laybell_config::Configuration;
use serde::Serialize;

/// Shortest plausible label path for this machine class (mm).
pub const MIN_TOTAL_LENGTH: f64 = 200.0;
/// Longest plausible label path for this machine class (mm).
pub const MAX_TOTAL_LENGTH: f64 = 1000.0;

/// Limits a path is checked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathLimits {
    pub min_bend_radius: f64,
    /// Top of the base plate; no waypoint may sit below it.
    pub base_thickness: f64,
    pub min_total_length: f64,
    pub max_total_length: f64,
}

impl PathLimits {
    pub fn new(min_bend_radius: f64, base_thickness: f64) -> Self {
        Self {
            min_bend_radius,
            base_thickness,
            min_total_length: MIN_TOTAL_LENGTH,
            max_total_length: MAX_TOTAL_LENGTH,
        }
    }

    pub fn from_config(cfg: &Configuration) -> Result<Self, ConfigError> {
        Ok(Self::new(
            cfg.require("min_bend_radius")?,
            cfg.require("base_thickness")?,
        ))
    }
}

/// Outcome of [`validate_path`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// Empty when every check passed.
    pub issues: Vec<String>,
    pub total_length: f64,
}

impl PathReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Straight-line length of each consecutive pair.
pub fn segment_lengths(waypoints: &[Waypoint]) -> Vec<f64> {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .collect()
}

/// Total label length: every straight segment plus the arc wrapped at the
/// waypoint each segment arrives at.
///
/// The first waypoint has no arriving segment, so any wrap there is ignored.
pub fn total_length(waypoints: &[Waypoint]) -> f64 {
    waypoints
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]) + pair[1].arc_length())
        .sum()
}

/// Check bend radii, total length, and elevation. All checks always run.
pub fn validate_path(waypoints: &[Waypoint], limits: &PathLimits) -> PathReport {
    let mut issues = Vec::new();

    for wp in waypoints {
        if wp.bend_radius > 0.0
            && wp.bend_radius < limits.min_bend_radius
            && wp.name != SEPARATION_WAYPOINT
        {
            issues.push(format!(
                "{}: bend radius {:.1}mm < minimum {:.1}mm",
                wp.name, wp.bend_radius, limits.min_bend_radius
            ));
        }
    }

    let total_length = total_length(waypoints);
    if total_length < limits.min_total_length {
        issues.push(format!("Total path length {total_length:.1}mm seems too short"));
    }
    if total_length > limits.max_total_length {
        issues.push(format!("Total path length {total_length:.1}mm seems too long"));
    }

    for wp in waypoints {
        if wp.position.z < limits.base_thickness {
            issues.push(format!(
                "{}: Z={:.1}mm is below base plate top ({}mm)",
                wp.name, wp.position.z, limits.base_thickness
            ));
        }
    }

    PathReport {
        issues,
        total_length,
    }
}
