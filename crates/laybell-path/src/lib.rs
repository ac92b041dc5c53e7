//! Label path model for the vial label applicator.
//!
//! Derives component placements once from a [`Configuration`]
//! ([`AssemblyLayout`]), reconstructs the route the label takes from spool
//! to vial as a sequence of [`Waypoint`]s, and checks that route against
//! bend-radius, length, and elevation constraints.

pub mod layout;
pub mod model;
pub mod validate;
pub mod waypoint;

pub use layout::{AssemblyLayout, ComponentPlacement};
pub use model::{build_waypoints, PathPlacements, Placement};
pub use validate::{segment_lengths, total_length, validate_path, PathLimits, PathReport};
pub use waypoint::Waypoint;

use laybell_common::ConfigError;
use laybell_config::Configuration;
use serde::Serialize;

/// Waypoints and their validation report for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathAnalysis {
    pub waypoints: Vec<Waypoint>,
    pub report: PathReport,
}

/// Layout, build, and validate the label path for `cfg`.
pub fn analyze(cfg: &Configuration) -> Result<PathAnalysis, ConfigError> {
    let layout = AssemblyLayout::from_config(cfg)?;
    let limits = PathLimits::from_config(cfg)?;
    let waypoints = build_waypoints(&layout.path_placements());
    let report = validate_path(&waypoints, &limits);
    tracing::debug!(
        total_length = report.total_length,
        issues = report.issues.len(),
        "analyzed label path"
    );
    Ok(PathAnalysis { waypoints, report })
}
