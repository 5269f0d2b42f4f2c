//! Geometry classifier (pipeline stage 1)
//!
//! Turns raw line/rect primitives into typed, oriented [`ClassifiedLine`]s
//! with snapped thin-axis positions, discarding shapes that cannot be grid
//! rulings: dots, diagonals, and near-squares. Text primitives are never
//! classified as lines; they participate only in cell-text assignment.
//!
//! Classification is a pure function of the primitive's bounding box and the
//! configured thresholds — the same input always produces the same output.

use crate::config::DetectorConfig;
use gridline_core::geometry::snap_to;
use gridline_core::{ClassifiedLine, Orientation, Primitive};

/// Classify one page's primitives into grid rulings.
///
/// Output order follows input order: all lines derived from earlier
/// primitives precede lines from later ones. Primitives that are text,
/// too small, non-finite, or shaped like neither a horizontal nor a
/// vertical ruling contribute nothing.
#[must_use = "returns the classified grid rulings"]
pub fn classify_primitives(primitives: &[&Primitive], config: &DetectorConfig) -> Vec<ClassifiedLine> {
    let mut lines = Vec::new();
    for primitive in primitives {
        if let Some(line) = classify_primitive(primitive, config) {
            lines.push(line);
        }
    }
    log::debug!(
        "classified {} of {} primitives as grid rulings",
        lines.len(),
        primitives.len()
    );
    lines
}

/// Classify a single primitive, if it is a grid ruling.
pub fn classify_primitive(primitive: &Primitive, config: &DetectorConfig) -> Option<ClassifiedLine> {
    if primitive.is_text() {
        return None;
    }
    let (x, y, width, height) = primitive.bounds();
    let w = width.abs();
    let h = height.abs();

    if !(x.is_finite() && y.is_finite() && w.is_finite() && h.is_finite()) {
        log::trace!("dropping {}: non-finite extent", primitive.id());
        return None;
    }

    // Dot or stray mark
    if w < config.min_stroke && h < config.min_stroke {
        log::trace!("dropping {}: below stroke minimum", primitive.id());
        return None;
    }

    if h < config.thin_axis_max || (w > config.long_axis_min && w / h > config.min_aspect_ratio) {
        return Some(ClassifiedLine {
            source_id: primitive.id().to_string(),
            orientation: Orientation::Horizontal,
            position: snap_to(y + h / 2.0, config.snap_step),
            range_start: x,
            range_end: x + w,
        });
    }

    if w < config.thin_axis_max || (h > config.long_axis_min && h / w > config.min_aspect_ratio) {
        return Some(ClassifiedLine {
            source_id: primitive.id().to_string(),
            orientation: Orientation::Vertical,
            position: snap_to(x + w / 2.0, config.snap_step),
            range_start: y,
            range_end: y + h,
        });
    }

    // Diagonal or near-square shape, not a ruling
    log::trace!("dropping {}: not ruling-shaped ({w} x {h})", primitive.id());
    None
}
