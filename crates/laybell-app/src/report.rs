//! Human-readable label path report.

use laybell_path::{segment_lengths, PathAnalysis};
use std::fmt;

/// Waypoints, segment lengths, total length, and issues of one analysis.
pub struct PathReportText<'a> {
    pub analysis: &'a PathAnalysis,
    pub label_width: f64,
    pub min_bend_radius: f64,
}

impl fmt::Display for PathReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let waypoints = &self.analysis.waypoints;

        writeln!(f, "Label Path Analysis")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(
            f,
            "\nLabel width: {}mm, min bend radius: {}mm",
            self.label_width, self.min_bend_radius
        )?;

        writeln!(f, "\nWaypoints:")?;
        for (i, wp) in waypoints.iter().enumerate() {
            let p = wp.position;
            write!(f, "  {}. {}: ({:.1}, {:.1}, {:.1})", i + 1, wp.name, p.x, p.y, p.z)?;
            if wp.bend_radius > 0.0 {
                write!(f, ", wrap={:.0}°, R={:.1}mm", wp.wrap_angle, wp.bend_radius)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\nSegment lengths:")?;
        for (pair, length) in waypoints.windows(2).zip(segment_lengths(waypoints)) {
            writeln!(f, "  {} → {}: {length:.1}mm", pair[0].name, pair[1].name)?;
        }

        let report = &self.analysis.report;
        writeln!(f, "\nTotal path length: {:.1}mm", report.total_length)?;
        if report.is_valid() {
            writeln!(f, "\nValidation PASSED")
        } else {
            writeln!(f, "\nValidation FAILED ({} issues):", report.issues.len())?;
            for issue in &report.issues {
                writeln!(f, "  ✗ {issue}")?;
            }
            Ok(())
        }
    }
}

/// Render the report for `analysis` as text.
pub fn render_path_report(
    analysis: &PathAnalysis,
    label_width: f64,
    min_bend_radius: f64,
) -> String {
    PathReportText {
        analysis,
        label_width,
        min_bend_radius,
    }
    .to_string()
}
