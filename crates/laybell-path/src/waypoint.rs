//! Waypoints along the label path.

use glam::DVec3;
use serde::Serialize;
use std::f64::consts::PI;

pub const SPOOL_EXIT: &str = "spool_exit";
pub const DANCER_ROLLER: &str = "dancer_roller";
pub const GUIDE_ROLLER: &str = "guide_roller";
pub const PEEL_ENTRY: &str = "peel_entry";
pub const PEEL_EDGE: &str = "peel_edge";
pub const VIAL_CONTACT: &str = "vial_contact";

/// Waypoint where label and backing separate. Its radius is deliberately
/// below the material minimum.
pub const SEPARATION_WAYPOINT: &str = PEEL_EDGE;

/// A named point on the label's route, optionally wrapping a roller or edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub name: String,
    /// Position in millimeters, origin at the base-plate centre.
    pub position: DVec3,
    /// Degrees of wrap at this point; 0 when the label passes straight through.
    pub wrap_angle: f64,
    /// Radius of the roller or edge causing the wrap; 0 for pass-through points.
    pub bend_radius: f64,
}

impl Waypoint {
    pub fn pass_through(name: impl Into<String>, position: DVec3) -> Self {
        Self {
            name: name.into(),
            position,
            wrap_angle: 0.0,
            bend_radius: 0.0,
        }
    }

    pub fn wrapped(
        name: impl Into<String>,
        position: DVec3,
        wrap_angle: f64,
        bend_radius: f64,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            wrap_angle,
            bend_radius,
        }
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrap_angle > 0.0 && self.bend_radius > 0.0
    }

    /// Length of label in contact with the roller: `(θ / 360) · 2πr`.
    pub fn arc_length(&self) -> f64 {
        if !self.is_wrapped() {
            return 0.0;
        }
        self.wrap_angle / 360.0 * 2.0 * PI * self.bend_radius
    }

    /// Straight-line distance to another waypoint.
    pub fn distance_to(&self, other: &Waypoint) -> f64 {
        self.position.distance(other.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_through_has_no_arc() {
        let wp = Waypoint::pass_through("a", DVec3::ZERO);
        assert!(!wp.is_wrapped());
        assert_eq!(wp.arc_length(), 0.0);
    }

    #[test]
    fn quarter_wrap_arc_length() {
        let wp = Waypoint::wrapped("roller", DVec3::ZERO, 90.0, 10.0);
        assert!((wp.arc_length() - 5.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn radius_without_angle_is_not_wrapped() {
        let wp = Waypoint::wrapped("roller", DVec3::ZERO, 0.0, 10.0);
        assert_eq!(wp.arc_length(), 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = Waypoint::pass_through("a", DVec3::new(0.0, 0.0, 0.0));
        let b = Waypoint::pass_through("b", DVec3::new(3.0, 4.0, 12.0));
        assert!((a.distance_to(&b) - 13.0).abs() < 1e-12);
    }
}
