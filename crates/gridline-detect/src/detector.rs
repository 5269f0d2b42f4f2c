//! Table assembler (pipeline orchestration)
//!
//! [`TableDetector`] drives the full pipeline per page: classify rulings,
//! group them into connected components, reconstruct each component's cell
//! grid, and re-associate text runs — then assigns stable page-scoped ids
//! and emits the combined table list.

use crate::assign::assign_text;
use crate::classify::classify_primitives;
use crate::config::DetectorConfig;
use crate::connectivity::group_components;
use crate::grid::reconstruct_grid;
use gridline_core::{DetectedTable, Orientation, Primitive};
use rustc_hash::FxHashMap;

/// Table detector over page-description primitives.
///
/// Detection is a pure, synchronous computation over an immutable snapshot
/// of primitives: no I/O, no long-lived resources, no error paths.
/// Degenerate input — too few rulings, zero-area primitives, empty text —
/// contributes no tables rather than failing.
///
/// # Examples
///
/// ```
/// use gridline_core::Primitive;
/// use gridline_detect::TableDetector;
///
/// let ruled_box = |id: &str, x: f32, y: f32, w: f32, h: f32| {
///     vec![
///         Primitive::Line { id: format!("{id}-top"), page: 1, x, y, width: w, height: 0.4 },
///         Primitive::Line { id: format!("{id}-bot"), page: 1, x, y: y + h, width: w, height: 0.4 },
///         Primitive::Line { id: format!("{id}-left"), page: 1, x, y, width: 0.4, height: h },
///         Primitive::Line { id: format!("{id}-right"), page: 1, x: x + w, y, width: 0.4, height: h },
///     ]
/// };
///
/// let detector = TableDetector::with_defaults();
/// let tables = detector.detect(&ruled_box("a", 0.0, 0.0, 200.0, 100.0));
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].id, "table-p1-0");
/// assert_eq!((tables[0].row_count, tables[0].col_count), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct TableDetector {
    config: DetectorConfig,
}

impl Default for TableDetector {
    #[inline]
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TableDetector {
    /// Create a detector with the given configuration.
    #[inline]
    #[must_use = "returns a new detector"]
    pub const fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Create a detector with the standard tolerances.
    #[inline]
    #[must_use = "returns a new detector with default configuration"]
    pub fn with_defaults() -> Self {
        Self::new(DetectorConfig::default())
    }

    /// The detector's configuration.
    #[inline]
    #[must_use = "returns the detector configuration"]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detect tables across all pages of the primitive list.
    ///
    /// Primitives are grouped by page and pages are processed in ascending
    /// page-number order; within a page, tables follow the component order
    /// (ascending union-find root index) and are assigned ids
    /// `"table-p{page}-{index}"` with a per-page index starting at 0.
    ///
    /// The output is therefore fully reproducible for a given input,
    /// including per-cell text order.
    #[must_use = "returns the detected tables"]
    pub fn detect(&self, primitives: &[Primitive]) -> Vec<DetectedTable> {
        let mut by_page: FxHashMap<u32, Vec<&Primitive>> = FxHashMap::default();
        for primitive in primitives {
            by_page.entry(primitive.page()).or_default().push(primitive);
        }

        let mut pages: Vec<u32> = by_page.keys().copied().collect();
        pages.sort_unstable();

        let mut tables = Vec::new();
        for page in pages {
            let page_tables = self.detect_page(page, &by_page[&page]);
            tables.extend(page_tables);
        }

        log::debug!(
            "detected {} table(s) across {} page(s)",
            tables.len(),
            by_page.len()
        );
        tables
    }

    /// Run the pipeline for a single page's primitives.
    fn detect_page(&self, page: u32, primitives: &[&Primitive]) -> Vec<DetectedTable> {
        let lines = classify_primitives(primitives, &self.config);

        // Fast path: a grid needs at least 2 rulings per orientation
        let h_count = lines
            .iter()
            .filter(|l| l.orientation == Orientation::Horizontal)
            .count();
        let v_count = lines.len() - h_count;
        if h_count < 2 || v_count < 2 {
            log::trace!("page {page}: {h_count}h x {v_count}v rulings, skipping");
            return Vec::new();
        }

        let mut tables = Vec::new();
        for component in group_components(lines, &self.config) {
            let Some(grid) = reconstruct_grid(&component, &self.config) else {
                continue;
            };
            let index = tables.len();
            tables.push(DetectedTable {
                id: format!("table-p{page}-{index}"),
                page,
                x: grid.x,
                y: grid.y,
                width: grid.width,
                height: grid.height,
                row_count: grid.row_count,
                col_count: grid.col_count,
                cells: grid.cells,
                line_ids: component.source_ids(),
            });
        }

        if !tables.is_empty() {
            let texts: Vec<&Primitive> = primitives
                .iter()
                .copied()
                .filter(|p| p.is_text())
                .collect();
            assign_text(&mut tables, &texts, self.config.text_attach_tolerance);
        }

        log::debug!("page {page}: {} table(s)", tables.len());
        tables
    }
}
