//! Assembly layout: the single derivation of component placements.
//!
//! Origin at the base-plate centre, X left to right, Y back to front, Z up.
//! Every consumer (path model, part builders, the manifest) reads placements
//! from here instead of recomputing them.

use crate::model::{PathPlacements, Placement};
use glam::DVec3;
use laybell_common::ConfigError;
use laybell_config::Configuration;
use serde::Serialize;
use tracing::debug;

/// Peel wall inset from the frame's right edge.
const PEEL_WALL_INSET: f64 = 5.0;
/// Cradle centre offset left of the peel wall, and toward the front.
const CRADLE_OFFSET: (f64, f64) = (35.0, 25.0);
/// Spool centre offset from the back-left corner.
const SPOOL_OFFSET: (f64, f64) = (30.0, 30.0);
/// Dancer pivot offset from the back-left corner.
const DANCER_OFFSET: (f64, f64) = (80.0, 35.0);
/// Fraction of the arm length the roller reaches along X at rest.
const DANCER_ARM_SWEEP: f64 = 0.7;
const DANCER_ROLLER_Y_OFFSET: f64 = 10.0;
/// Guide bracket offset left of the peel wall, and from the back edge.
const GUIDE_OFFSET: (f64, f64) = (70.0, 25.0);
/// Gap between the guide roller and the top of its bracket.
const GUIDE_ROLLER_DROP: f64 = 2.0;
/// Height the label enters the peel plate above the peel edge.
const PEEL_ENTRY_RISE: f64 = 5.0;
/// Radius of the sharp separation edge (2mm diameter).
pub const PEEL_EDGE_RADIUS: f64 = 1.0;

/// Designed wrap angles in degrees.
pub const DANCER_WRAP: f64 = 90.0;
pub const GUIDE_WRAP: f64 = 45.0;
pub const PEEL_EDGE_WRAP: f64 = 160.0;
pub const VIAL_WRAP: f64 = 270.0;

/// Component positions derived once from a configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyLayout {
    pub base_thickness: f64,
    /// Peel mounting wall centre; Z is the wall's vertical midpoint.
    pub peel_wall: DVec3,
    pub peel_entry: DVec3,
    pub peel_edge: DVec3,
    pub peel_edge_radius: f64,
    /// Cradle footprint centre on the base plate.
    pub cradle: DVec3,
    /// Where the vial sits on the V-block.
    pub vial_center: DVec3,
    pub vial_radius: f64,
    /// Spool holder footprint centre on the base plate.
    pub spool: DVec3,
    pub spool_exit: DVec3,
    /// Top of the dancer pivot post.
    pub dancer_pivot: DVec3,
    pub dancer_roller: DVec3,
    /// Guide bracket footprint centre on the base plate.
    pub guide_bracket: DVec3,
    pub guide_roller: DVec3,
    /// Radius of the bearing rollers (dancer and guide).
    pub roller_radius: f64,
}

impl AssemblyLayout {
    /// Derive every placement from `cfg`.
    ///
    /// Fails with `InvalidConfig` naming the first missing or non-numeric key;
    /// run full validation first for a complete report.
    pub fn from_config(cfg: &Configuration) -> Result<Self, ConfigError> {
        let base = cfg.require("base_thickness")?;
        let frame_length = cfg.require("frame_length")?;
        let frame_width = cfg.require("frame_width")?;
        let wall_height = cfg.require("frame_wall_height")?;
        let wall_thickness = cfg.require("frame_wall_thickness")?;
        let peel_depth = cfg.require("peel_body_depth")?;
        let bearing_od = cfg.require("bearing_od")?;

        let half_length = frame_length / 2.0;
        let half_width = frame_width / 2.0;

        let peel_wall_x = half_length - wall_thickness / 2.0 - PEEL_WALL_INSET;
        let peel_edge_z = wall_height / 2.0 + base;

        let cradle_x = peel_wall_x - CRADLE_OFFSET.0;
        let cradle_y = CRADLE_OFFSET.1;

        let spool_x = -half_length + SPOOL_OFFSET.0;
        let spool_y = -half_width + SPOOL_OFFSET.1;
        let spool_exit_z = base
            + cfg.require("spool_flange_thickness")?
            + cfg.require("spool_height")? / 2.0;

        let dancer_x = -half_length + DANCER_OFFSET.0;
        let dancer_y = -half_width + DANCER_OFFSET.1;
        let pivot_top_z = base + cfg.require("pivot_post_height")?;
        let dancer_roller_z = pivot_top_z + cfg.require("dancer_arm_thickness")? / 2.0;
        let arm_length = cfg.require("dancer_arm_length")?;

        let guide_x = peel_wall_x - GUIDE_OFFSET.0;
        let guide_y = -half_width + GUIDE_OFFSET.1;
        let guide_roller_z =
            base + cfg.require("bracket_height")? - bearing_od / 2.0 - GUIDE_ROLLER_DROP;

        let vial_center_z = base + cfg.require("cradle_v_block_height")?;
        let peel_entry_z = peel_edge_z + PEEL_ENTRY_RISE;

        let layout = Self {
            base_thickness: base,
            peel_wall: DVec3::new(peel_wall_x, 0.0, peel_edge_z),
            peel_entry: DVec3::new(peel_wall_x - peel_depth, 0.0, peel_entry_z),
            peel_edge: DVec3::new(peel_wall_x - peel_depth / 2.0, 0.0, peel_edge_z),
            peel_edge_radius: PEEL_EDGE_RADIUS,
            cradle: DVec3::new(cradle_x, cradle_y, base),
            vial_center: DVec3::new(cradle_x, cradle_y, vial_center_z),
            vial_radius: cfg.require("vial_diameter")? / 2.0,
            spool: DVec3::new(spool_x, spool_y, base),
            spool_exit: DVec3::new(spool_x, spool_y, spool_exit_z),
            dancer_pivot: DVec3::new(dancer_x, dancer_y, pivot_top_z),
            dancer_roller: DVec3::new(
                dancer_x + arm_length * DANCER_ARM_SWEEP,
                dancer_y + DANCER_ROLLER_Y_OFFSET,
                dancer_roller_z,
            ),
            guide_bracket: DVec3::new(guide_x, guide_y, base),
            guide_roller: DVec3::new(guide_x, guide_y, guide_roller_z),
            roller_radius: bearing_od / 2.0,
        };
        debug!(
            peel_edge = ?layout.peel_edge,
            vial_center = ?layout.vial_center,
            "derived assembly layout"
        );
        Ok(layout)
    }

    /// Placements the label path passes through.
    pub fn path_placements(&self) -> PathPlacements {
        PathPlacements {
            spool_exit: self.spool_exit,
            dancer_roller: Placement {
                position: self.dancer_roller,
                radius: self.roller_radius,
                wrap_angle: DANCER_WRAP,
            },
            guide_roller: Placement {
                position: self.guide_roller,
                radius: self.roller_radius,
                wrap_angle: GUIDE_WRAP,
            },
            peel_entry: self.peel_entry,
            peel_edge: Placement {
                position: self.peel_edge,
                radius: self.peel_edge_radius,
                wrap_angle: PEEL_EDGE_WRAP,
            },
            vial_contact: Placement {
                position: self.vial_center,
                radius: self.vial_radius,
                wrap_angle: VIAL_WRAP,
            },
        }
    }

    /// Printed components, where each is mounted, and its display colour.
    pub fn manifest(&self) -> Vec<ComponentPlacement> {
        vec![
            ComponentPlacement::new("Frame", "main_frame.stl", DVec3::ZERO, GREY),
            ComponentPlacement::new("PeelPlate", "peel_plate.stl", self.peel_wall, BLUE),
            ComponentPlacement::new("VialCradle", "vial_cradle.stl", self.cradle, ORANGE),
            ComponentPlacement::new("SpoolHolder", "spool_holder.stl", self.spool, GREEN),
            ComponentPlacement::new("DancerArm", "dancer_arm.stl", self.dancer_pivot, PURPLE),
            ComponentPlacement::new(
                "GuideRollerBracket",
                "guide_roller_bracket.stl",
                self.guide_bracket,
                YELLOW,
            ),
        ]
    }
}

/// Display colours, RGBA in `[0, 1]`.
const GREY: [f64; 4] = [0.6, 0.6, 0.6, 1.0];
const BLUE: [f64; 4] = [0.2, 0.5, 0.8, 1.0];
const ORANGE: [f64; 4] = [0.8, 0.4, 0.2, 1.0];
const GREEN: [f64; 4] = [0.3, 0.7, 0.3, 1.0];
const PURPLE: [f64; 4] = [0.7, 0.2, 0.5, 1.0];
const YELLOW: [f64; 4] = [0.8, 0.8, 0.2, 1.0];

/// One entry of the assembly manifest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentPlacement {
    pub name: &'static str,
    pub file: &'static str,
    pub position: [f64; 3],
    /// Euler angles in degrees. Every part prints in its mounted orientation.
    pub rotation: [f64; 3],
    pub color: [f64; 4],
}

impl ComponentPlacement {
    fn new(name: &'static str, file: &'static str, position: DVec3, color: [f64; 4]) -> Self {
        Self {
            name,
            file,
            position: position.to_array(),
            rotation: [0.0; 3],
            color,
        }
    }
}
