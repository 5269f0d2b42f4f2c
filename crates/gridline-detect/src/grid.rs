//! Grid reconstructor (pipeline stage 3)
//!
//! Per candidate component: deduplicate near-equal ruling positions into
//! ordered grid axes, derive rows × columns, and materialize the dense cell
//! grid. Components whose rulings collapse onto fewer than 2 distinct
//! coordinates on either axis are not grids and yield nothing.

use crate::config::DetectorConfig;
use crate::connectivity::LineComponent;
use gridline_core::geometry::dedup_within;
use gridline_core::{Cell, ClassifiedLine};

/// A reconstructed cell grid, before page/id assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructedGrid {
    /// Bounding-box origin x (first vertical grid line)
    pub x: f32,
    /// Bounding-box origin y (first horizontal grid line)
    pub y: f32,
    /// Bounding-box width
    pub width: f32,
    /// Bounding-box height
    pub height: f32,
    /// Number of rows
    pub row_count: usize,
    /// Number of columns
    pub col_count: usize,
    /// Dense row-major cell grid
    pub cells: Vec<Vec<Cell>>,
}

/// Sorted, deduplicated grid coordinates for one axis.
fn axis_coordinates(lines: &[ClassifiedLine], snap_step: f32) -> Vec<f32> {
    let mut positions: Vec<f32> = lines.iter().map(|line| line.position).collect();
    positions.sort_by(f32::total_cmp);
    dedup_within(&positions, snap_step)
}

/// Reconstruct the cell grid of one candidate component.
///
/// Returns `None` if either axis has fewer than 2 distinct coordinates
/// after snapping and deduplication.
#[must_use = "returns the reconstructed grid, if the component is one"]
pub fn reconstruct_grid(component: &LineComponent, config: &DetectorConfig) -> Option<ReconstructedGrid> {
    let ys = axis_coordinates(&component.horizontals, config.snap_step);
    let xs = axis_coordinates(&component.verticals, config.snap_step);

    if ys.len() < 2 || xs.len() < 2 {
        log::trace!(
            "dropping candidate: {} x {} distinct grid coordinates",
            ys.len(),
            xs.len()
        );
        return None;
    }

    let row_count = ys.len() - 1;
    let col_count = xs.len() - 1;

    let mut cells = Vec::with_capacity(row_count);
    for row in 0..row_count {
        let mut row_cells = Vec::with_capacity(col_count);
        for col in 0..col_count {
            row_cells.push(Cell {
                row,
                col,
                x: xs[col],
                y: ys[row],
                width: xs[col + 1] - xs[col],
                height: ys[row + 1] - ys[row],
                text: String::new(),
                source_text_ids: Vec::new(),
            });
        }
        cells.push(row_cells);
    }

    Some(ReconstructedGrid {
        x: xs[0],
        y: ys[0],
        width: xs[col_count] - xs[0],
        height: ys[row_count] - ys[0],
        row_count,
        col_count,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridline_core::Orientation;

    fn horizontal(y: f32) -> ClassifiedLine {
        ClassifiedLine {
            source_id: format!("h@{y}"),
            orientation: Orientation::Horizontal,
            position: y,
            range_start: 0.0,
            range_end: 200.0,
        }
    }

    fn vertical(x: f32) -> ClassifiedLine {
        ClassifiedLine {
            source_id: format!("v@{x}"),
            orientation: Orientation::Vertical,
            position: x,
            range_start: 0.0,
            range_end: 150.0,
        }
    }

    fn component(ys: &[f32], xs: &[f32]) -> LineComponent {
        LineComponent {
            horizontals: ys.iter().copied().map(horizontal).collect(),
            verticals: xs.iter().copied().map(vertical).collect(),
        }
    }

    #[test]
    fn test_single_cell_grid() {
        let grid = reconstruct_grid(
            &component(&[0.0, 100.0], &[0.0, 200.0]),
            &DetectorConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.row_count, 1);
        assert_eq!(grid.col_count, 1);
        assert_eq!((grid.x, grid.y, grid.width, grid.height), (0.0, 0.0, 200.0, 100.0));
        let cell = &grid.cells[0][0];
        assert_eq!((cell.width, cell.height), (200.0, 100.0));
    }

    #[test]
    fn test_three_by_three_grid() {
        let coords = [0.0, 50.0, 100.0, 150.0];
        let grid = reconstruct_grid(&component(&coords, &coords), &DetectorConfig::default()).unwrap();
        assert_eq!(grid.row_count, 3);
        assert_eq!(grid.col_count, 3);
        assert_eq!(grid.cells.len(), 3);
        assert!(grid.cells.iter().all(|row| row.len() == 3));

        // Row-major addressing matches stored indices
        for (r, row) in grid.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                assert_eq!((cell.row, cell.col), (r, c));
                assert_eq!(cell.x, coords[c]);
                assert_eq!(cell.y, coords[r]);
            }
        }
    }

    #[test]
    fn test_unsorted_positions_are_ordered() {
        let grid = reconstruct_grid(
            &component(&[100.0, 0.0, 50.0], &[200.0, 0.0]),
            &DetectorConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.row_count, 2);
        assert_eq!(grid.cells[0][0].y, 0.0);
        assert_eq!(grid.cells[1][0].y, 50.0);
    }

    #[test]
    fn test_near_equal_positions_collapse() {
        // Double-struck ruling at y≈0 collapses into one grid line
        let grid = reconstruct_grid(
            &component(&[0.0, 1.0, 100.0], &[0.0, 200.0]),
            &DetectorConfig::default(),
        )
        .unwrap();
        assert_eq!(grid.row_count, 1);
    }

    #[test]
    fn test_collapsed_axis_drops_candidate() {
        // Two horizontals within the snap step = one distinct coordinate
        let result = reconstruct_grid(
            &component(&[0.0, 1.0], &[0.0, 200.0]),
            &DetectorConfig::default(),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_cell_sizes_sum_to_table_extent() {
        let grid = reconstruct_grid(
            &component(&[0.0, 30.0, 100.0], &[0.0, 80.0, 90.0, 200.0]),
            &DetectorConfig::default(),
        )
        .unwrap();
        for row in &grid.cells {
            let width_sum: f32 = row.iter().map(|c| c.width).sum();
            assert!((width_sum - grid.width).abs() < f32::EPSILON * 100.0);
        }
        for col in 0..grid.col_count {
            let height_sum: f32 = grid.cells.iter().map(|row| row[col].height).sum();
            assert!((height_sum - grid.height).abs() < f32::EPSILON * 100.0);
        }
    }
}
