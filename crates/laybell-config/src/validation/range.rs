//! Per-dimension range and printability checks.

use super::helpers::validate_bounds;
use super::{RequiredValues, MAX_DIMENSION, MIN_DIMENSION, MIN_WALL, POSITIVE_DIMENSIONS};

/// Every positive dimension must lie in `[MIN_DIMENSION, MAX_DIMENSION]`.
pub(crate) fn validate_ranges(errors: &mut Vec<String>, values: &RequiredValues) {
    for key in POSITIVE_DIMENSIONS {
        validate_bounds(errors, key, values.get(key), MIN_DIMENSION, MAX_DIMENSION);
    }
}

/// Walls thinner than `MIN_WALL` do not print, independent of the generic range.
pub(crate) fn validate_wall_thickness(errors: &mut Vec<String>, values: &RequiredValues) {
    let wall = values.get("wall_thickness");
    if wall < MIN_WALL {
        errors.push(format!(
            "wall_thickness: {wall}mm below printable minimum ({MIN_WALL}mm)"
        ));
    }
}
