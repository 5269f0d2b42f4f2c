//! Shared tolerance-bucketing helpers
//!
//! Two places in the pipeline collapse near-equal coordinates: the geometry
//! classifier snaps line positions to a grid step, and the grid reconstructor
//! deduplicates component coordinates into ordered axes. Both go through the
//! helpers here so the tolerance semantics cannot diverge.

/// Round `value` to the nearest multiple of `step`.
///
/// Snapping makes classification deterministic: two rulings whose thin-axis
/// centers differ by less than half a step land on the same grid coordinate.
///
/// # Examples
///
/// ```
/// use gridline_core::geometry::snap_to;
///
/// assert_eq!(snap_to(10.6, 1.5), 10.5);
/// assert_eq!(snap_to(0.7, 1.5), 0.0);
/// assert_eq!(snap_to(-2.3, 1.5), -3.0);
/// ```
#[inline]
#[must_use = "returns the snapped value"]
pub fn snap_to(value: f32, step: f32) -> f32 {
    (value / step).round() * step
}

/// Collapse consecutive sorted values within `tolerance` of each other.
///
/// `values` must be sorted ascending. The first value of each run is kept;
/// a new run starts when a value exceeds the last kept value by more than
/// `tolerance`. The result is strictly increasing.
#[must_use = "returns the deduplicated coordinate sequence"]
pub fn dedup_within(values: &[f32], tolerance: f32) -> Vec<f32> {
    let mut out: Vec<f32> = Vec::with_capacity(values.len());
    for &v in values {
        match out.last() {
            Some(&last) if v - last <= tolerance => {}
            _ => out.push(v),
        }
    }
    out
}
