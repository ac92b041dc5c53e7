//! Relationships between fields.

use super::helpers::{require_greater, require_less};
use super::RequiredValues;

fn field<'a>(values: &RequiredValues, key: &'a str) -> (&'a str, f64) {
    (key, values.get(key))
}

/// The label must fit the frame and the vial.
pub(crate) fn validate_label(errors: &mut Vec<String>, values: &RequiredValues) {
    require_less(errors, field(values, "label_width"), field(values, "frame_width"));
    require_less(errors, field(values, "label_height"), field(values, "vial_height"));

    let offset = values.get("label_offset_from_bottom");
    let height = values.get("label_height");
    let vial_height = values.get("vial_height");
    if offset + height > vial_height {
        errors.push(format!(
            "label_offset_from_bottom + label_height ({offset}mm + {height}mm) \
             exceeds vial_height ({vial_height}mm)"
        ));
    }
}

/// Flanges and bearings must be larger outside than inside.
pub(crate) fn validate_hardware(errors: &mut Vec<String>, values: &RequiredValues) {
    require_greater(
        errors,
        field(values, "spool_flange_diameter"),
        field(values, "spool_spindle_od"),
    );
    require_greater(errors, field(values, "bearing_od"), field(values, "bearing_id"));
}
