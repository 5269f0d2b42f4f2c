//! Detected tables and their cells
//!
//! [`DetectedTable`] is the primary output of detection: a dense row-major
//! grid of [`Cell`]s reconstructed from intersecting rulings, with text runs
//! re-associated by centroid. Tables are immutable once assembled; they hold
//! id references back to the source primitives and never own them.

use serde::{Deserialize, Serialize};

/// A single cell of a reconstructed table grid.
///
/// Cells are created empty during grid reconstruction and mutated only by
/// the cell-text assignment pass, which appends text in encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Row index within the table grid (0-based, top row first in axis order)
    pub row: usize,
    /// Column index within the table grid (0-based)
    pub col: usize,
    /// Cell origin x (left grid line)
    pub x: f32,
    /// Cell origin y (first grid line on the y axis)
    pub y: f32,
    /// Cell width (distance to the next vertical grid line)
    pub width: f32,
    /// Cell height (distance to the next horizontal grid line)
    pub height: f32,
    /// Concatenated text of all runs whose centroid falls in this cell,
    /// joined by single spaces in encounter order
    #[serde(default)]
    pub text: String,
    /// Ids of the contributing text primitives, in encounter order
    #[serde(default)]
    pub source_text_ids: Vec<String>,
}

impl Cell {
    /// Whether any text run was assigned to this cell.
    #[inline]
    #[must_use = "returns whether the cell holds any text"]
    pub fn is_empty(&self) -> bool {
        self.source_text_ids.is_empty()
    }
}

/// A table reconstructed from one connected component of grid rulings.
///
/// Invariants:
/// - `row_count == cells.len()` and every row has `col_count` entries
/// - the bounding box spans the min/max grid coordinates of the component
/// - a table only exists where at least 2 distinct horizontal and 2 distinct
///   vertical grid lines were found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedTable {
    /// Page-scoped synthetic identifier, `"table-p{page}-{index}"`
    pub id: String,
    /// 1-based page number
    pub page: u32,
    /// Bounding-box origin x (first vertical grid line)
    pub x: f32,
    /// Bounding-box origin y (first horizontal grid line)
    pub y: f32,
    /// Bounding-box width (last minus first vertical grid line)
    pub width: f32,
    /// Bounding-box height (last minus first horizontal grid line)
    pub height: f32,
    /// Number of rows in the grid
    pub row_count: usize,
    /// Number of columns in the grid
    pub col_count: usize,
    /// Dense row-major cell grid, `cells[row][col]`
    pub cells: Vec<Vec<Cell>>,
    /// Ids of the line/rect primitives whose rulings formed this table,
    /// in component-member order
    #[serde(default)]
    pub line_ids: Vec<String>,
}

impl DetectedTable {
    /// Cell at `(row, col)`, if in range.
    #[inline]
    #[must_use = "returns the cell at the given grid position"]
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// The cell text as a `row_count × col_count` matrix.
    ///
    /// This is the listing view: row/column text without geometry.
    #[must_use = "returns the cell text matrix"]
    pub fn text_matrix(&self) -> Vec<Vec<&str>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|c| c.text.as_str()).collect())
            .collect()
    }

    /// Render the cell text as a markdown pipe table.
    ///
    /// The first grid row is rendered as the header row. Pipe characters in
    /// cell text are escaped.
    #[must_use = "returns the markdown rendering"]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for (row_idx, row) in self.cells.iter().enumerate() {
            out.push('|');
            for cell in row {
                out.push(' ');
                out.push_str(&cell.text.replace('|', "\\|"));
                out.push_str(" |");
            }
            out.push('\n');
            if row_idx == 0 {
                out.push('|');
                for _ in row {
                    out.push_str(" --- |");
                }
                out.push('\n');
            }
        }
        out
    }
}
