//! Shared comparison helpers used by the semantic validators.

/// Push an error if `value` is outside `[min, max]`, naming the bound crossed.
pub(crate) fn validate_bounds(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if value < min {
        errors.push(format!("{name}: {value}mm is below minimum ({min}mm)"));
    }
    if value > max {
        errors.push(format!("{name}: {value}mm exceeds maximum ({max}mm)"));
    }
}

/// Push an error unless `a < b`.
pub(crate) fn require_less(errors: &mut Vec<String>, a: (&str, f64), b: (&str, f64)) {
    if a.1 >= b.1 {
        errors.push(format!("{} ({}mm) must be < {} ({}mm)", a.0, a.1, b.0, b.1));
    }
}

/// Push an error unless `a > b`.
pub(crate) fn require_greater(errors: &mut Vec<String>, a: (&str, f64), b: (&str, f64)) {
    if a.1 <= b.1 {
        errors.push(format!("{} ({}mm) must be > {} ({}mm)", a.0, a.1, b.0, b.1));
    }
}
