//! Waypoint assembly from component placements.

use crate::waypoint::{
    Waypoint, DANCER_ROLLER, GUIDE_ROLLER, PEEL_EDGE, PEEL_ENTRY, SPOOL_EXIT, VIAL_CONTACT,
};
use glam::DVec3;
use serde::Serialize;

/// Where a roller or edge sits, how large it is, and how far the label wraps it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub position: DVec3,
    pub radius: f64,
    pub wrap_angle: f64,
}

/// Every placement the label path touches, in travel order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathPlacements {
    pub spool_exit: DVec3,
    pub dancer_roller: Placement,
    pub guide_roller: Placement,
    pub peel_entry: DVec3,
    pub peel_edge: Placement,
    pub vial_contact: Placement,
}

fn wrapped(name: &str, placement: &Placement) -> Waypoint {
    Waypoint::wrapped(name, placement.position, placement.wrap_angle, placement.radius)
}

/// Build the six waypoints from spool to vial.
///
/// Pure assembly; no checks are made here.
pub fn build_waypoints(placements: &PathPlacements) -> Vec<Waypoint> {
    vec![
        Waypoint::pass_through(SPOOL_EXIT, placements.spool_exit),
        wrapped(DANCER_ROLLER, &placements.dancer_roller),
        wrapped(GUIDE_ROLLER, &placements.guide_roller),
        Waypoint::pass_through(PEEL_ENTRY, placements.peel_entry),
        wrapped(PEEL_EDGE, &placements.peel_edge),
        wrapped(VIAL_CONTACT, &placements.vial_contact),
    ]
}
