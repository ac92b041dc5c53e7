//! Dimensional validation.
//!
//! Runs in two phases. The structural phase checks that every required key
//! is present and numeric and fails immediately with just those issues. The
//! semantic phase (ranges, printability, cross-field relationships) runs only
//! on a structurally clean config and collects every issue into a single
//! `ConfigError::InvalidConfig`.

mod cross_field;
mod helpers;
mod range;
mod structural;


pub use structural::RequiredValues;

use crate::schema::Configuration;
use laybell_common::ConfigError;

/// Keys every consumer relies on.
pub const REQUIRED_KEYS: &[&str] = &[
    "vial_diameter",
    "vial_height",
    "label_width",
    "label_height",
    "label_offset_from_bottom",
    "label_thickness",
    "min_bend_radius",
    "wall_thickness",
    "base_thickness",
    "mount_hole_diameter",
    "fillet_radius",
    "frame_length",
    "frame_width",
    "frame_wall_height",
    "frame_wall_thickness",
    "peel_channel_width_clearance",
    "peel_body_depth",
    "peel_body_height_rear",
    "peel_mount_hole_spacing",
    "cradle_base_height",
    "cradle_v_block_height",
    "cradle_mount_slot_spacing_x",
    "cradle_mount_slot_spacing_y",
    "spool_spindle_od",
    "spool_flange_diameter",
    "spool_flange_thickness",
    "spool_height",
    "dancer_arm_length",
    "dancer_arm_width",
    "dancer_arm_thickness",
    "pivot_bore",
    "bearing_od",
    "bearing_id",
    "bracket_base_width",
    "bracket_base_depth",
    "bracket_height",
    "pivot_post_height",
];

/// Required keys that are physical dimensions and must lie in
/// `[MIN_DIMENSION, MAX_DIMENSION]`.
pub const POSITIVE_DIMENSIONS: &[&str] = &[
    "vial_diameter",
    "vial_height",
    "label_width",
    "label_height",
    "label_thickness",
    "wall_thickness",
    "base_thickness",
    "frame_length",
    "frame_width",
    "frame_wall_height",
    "frame_wall_thickness",
    "peel_body_depth",
    "peel_body_height_rear",
    "spool_spindle_od",
    "spool_flange_diameter",
    "spool_flange_thickness",
    "spool_height",
    "dancer_arm_length",
    "dancer_arm_width",
    "dancer_arm_thickness",
    "pivot_bore",
    "bearing_od",
    "bearing_id",
    "bracket_base_width",
    "bracket_base_depth",
    "bracket_height",
    "pivot_post_height",
    "mount_hole_diameter",
];

/// Smallest printable feature (mm).
pub const MIN_DIMENSION: f64 = 0.1;
/// Largest dimension that fits the build volume (mm).
pub const MAX_DIMENSION: f64 = 500.0;
/// Thinnest wall that prints reliably (mm).
pub const MIN_WALL: f64 = 0.8;

/// Validate a configuration, reporting every issue of the failing phase.
pub fn validate(cfg: &Configuration) -> Result<(), ConfigError> {
    let values = structural::check_required(cfg).map_err(ConfigError::InvalidConfig)?;

    let mut errors: Vec<String> = Vec::new();
    range::validate_ranges(&mut errors, &values);
    range::validate_wall_thickness(&mut errors, &values);
    cross_field::validate_label(&mut errors, &values);
    cross_field::validate_hardware(&mut errors, &values);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::InvalidConfig(errors))
    }
}
