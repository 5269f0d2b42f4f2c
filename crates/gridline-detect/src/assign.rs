//! Cell-text assigner (pipeline stage 4)
//!
//! Maps text primitives into the enclosing grid cell by centroid and
//! concatenates their content in encounter order. A text run may match
//! cells of multiple overlapping tables — every match is recorded
//! independently, and a run matching nothing is simply not attached.

use gridline_core::{DetectedTable, Primitive};

/// Whether the point `(px, py)` lies inside the cell rectangle, with an
/// inclusive `tolerance` on all four sides. The y-extent is normalized with
/// min/max so either vertical convention (top-down or bottom-up origin)
/// works.
#[inline]
fn cell_contains(cell: &gridline_core::Cell, px: f32, py: f32, tolerance: f32) -> bool {
    let y_lo = cell.y.min(cell.y + cell.height);
    let y_hi = cell.y.max(cell.y + cell.height);
    px >= cell.x - tolerance
        && px <= cell.x + cell.width + tolerance
        && py >= y_lo - tolerance
        && py <= y_hi + tolerance
}

/// Attach one page's text primitives to the cells of its detected tables.
///
/// Text runs are visited in `texts` order (the primitive encounter order),
/// so per-cell concatenation order is reproducible. Runs with empty content
/// are skipped.
pub fn assign_text(tables: &mut [DetectedTable], texts: &[&Primitive], tolerance: f32) {
    let mut attached = 0_usize;
    for text in texts {
        let Primitive::Text {
            id,
            x,
            y,
            width,
            height,
            content,
            ..
        } = *text
        else {
            continue;
        };
        if content.is_empty() {
            continue;
        }

        let cx = x + width / 2.0;
        let cy = y + height / 2.0;

        for table in tables.iter_mut() {
            for row in &mut table.cells {
                for cell in row {
                    if cell_contains(cell, cx, cy, tolerance) {
                        if !cell.text.is_empty() {
                            cell.text.push(' ');
                        }
                        cell.text.push_str(content);
                        cell.source_text_ids.push(id.clone());
                        attached += 1;
                    }
                }
            }
        }
    }
    log::debug!("attached {attached} text match(es) across {} table(s)", tables.len());
}
