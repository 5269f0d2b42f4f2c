//! End-to-end detection scenarios over synthetic page primitives.

mod common;

use common::{hline, ruling_grid, text, vline};
use gridline_detect::TableDetector;

/// Grid coordinates snap to the configured step (default 1.5), so scenario
/// coordinates that are not multiples of the step land within half a step.
fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

#[test]
fn scenario_a_single_rectangle_is_one_1x1_table() {
    common::init_logs();
    let primitives = vec![
        hline("h0", 1, 0.0, 0.0, 200.0),
        hline("h1", 1, 0.0, 100.0, 200.0),
        vline("v0", 1, 0.0, 0.0, 100.0),
        vline("v1", 1, 200.0, 0.0, 100.0),
    ];

    let tables = TableDetector::with_defaults().detect(&primitives);
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.id, "table-p1-0");
    assert_eq!((table.row_count, table.col_count), (1, 1));

    let half_step = TableDetector::with_defaults().config().snap_step / 2.0;
    assert_close(table.x, 0.0, half_step);
    assert_close(table.y, 0.0, half_step);
    assert_close(table.width, 200.0, half_step);
    assert_close(table.height, 100.0, half_step);
}

#[test]
fn scenario_b_3x3_grid_with_one_centered_text_run() {
    let coords = [0.0, 50.0, 100.0, 150.0];
    let mut primitives = ruling_grid("g", 1, &coords, &coords);
    // Centroid (75, 75): inside cell (1, 1) and no other
    primitives.push(text("t0", 1, 65.0, 70.0, "payload"));

    let tables = TableDetector::with_defaults().detect(&primitives);
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!((table.row_count, table.col_count), (3, 3));

    for row in 0..3 {
        for col in 0..3 {
            let cell = table.cell(row, col).unwrap();
            if (row, col) == (1, 1) {
                assert_eq!(cell.text, "payload");
                assert_eq!(cell.source_text_ids, vec!["t0"]);
            } else {
                assert!(cell.text.is_empty(), "cell ({row}, {col}) should be empty");
                assert!(cell.source_text_ids.is_empty());
            }
        }
    }
}

#[test]
fn scenario_c_isolated_line_yields_no_tables() {
    let primitives = vec![hline("h0", 1, 0.0, 50.0, 300.0)];
    assert!(TableDetector::with_defaults().detect(&primitives).is_empty());
}

#[test]
fn scenario_d_two_far_apart_grids_are_distinct_tables() {
    let mut primitives = ruling_grid("a", 1, &[0.0, 50.0, 100.0], &[0.0, 40.0, 80.0]);
    primitives.extend(ruling_grid(
        "b",
        1,
        &[400.0, 450.0, 500.0],
        &[400.0, 440.0, 480.0],
    ));

    let tables = TableDetector::with_defaults().detect(&primitives);
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].id, "table-p1-0");
    assert_eq!(tables[1].id, "table-p1-1");
    assert_eq!((tables[0].row_count, tables[0].col_count), (2, 2));
    assert_eq!((tables[1].row_count, tables[1].col_count), (2, 2));

    // Bounding boxes must not overlap
    let a = &tables[0];
    let b = &tables[1];
    let disjoint_x = a.x + a.width < b.x || b.x + b.width < a.x;
    let disjoint_y = a.y + a.height < b.y || b.y + b.height < a.y;
    assert!(disjoint_x || disjoint_y);
}

#[test]
fn cell_coverage_invariant_holds_for_uneven_grids() {
    let primitives = ruling_grid(
        "g",
        1,
        &[0.0, 30.0, 45.0, 150.0],
        &[0.0, 12.0, 90.0],
    );
    let tables = TableDetector::with_defaults().detect(&primitives);
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.cells.len(), table.row_count);
    for row in &table.cells {
        assert_eq!(row.len(), table.col_count);
        let width_sum: f32 = row.iter().map(|c| c.width).sum();
        assert_close(width_sum, table.width, 1e-3);
    }
    for col in 0..table.col_count {
        let height_sum: f32 = table.cells.iter().map(|row| row[col].height).sum();
        assert_close(height_sum, table.height, 1e-3);
    }
}

#[test]
fn detection_is_idempotent_including_text_order() {
    let mut primitives = ruling_grid("g", 2, &[0.0, 60.0, 120.0], &[0.0, 25.0, 50.0]);
    primitives.push(text("t0", 2, 10.0, 5.0, "alpha"));
    primitives.push(text("t1", 2, 20.0, 8.0, "beta"));
    primitives.push(text("t2", 2, 70.0, 30.0, "gamma"));

    let detector = TableDetector::with_defaults();
    let first = detector.detect(&primitives);
    let second = detector.detect(&primitives);
    assert_eq!(first, second);

    // Two runs in the same cell concatenate in encounter order
    let cell = first[0].cell(0, 0).unwrap();
    assert_eq!(cell.text, "alpha beta");
    assert_eq!(cell.source_text_ids, vec!["t0", "t1"]);
}

#[test]
fn multipage_output_is_page_ascending_with_per_page_indices() {
    let mut primitives = Vec::new();
    // Pages supplied out of order
    primitives.extend(ruling_grid("p5", 5, &[0.0, 50.0], &[0.0, 50.0]));
    primitives.extend(ruling_grid("p2a", 2, &[0.0, 50.0], &[0.0, 50.0]));
    primitives.extend(ruling_grid("p2b", 2, &[300.0, 350.0], &[300.0, 350.0]));

    let tables = TableDetector::with_defaults().detect(&primitives);
    let ids: Vec<&str> = tables.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["table-p2-0", "table-p2-1", "table-p5-0"]);
}

#[test]
fn text_outside_any_table_is_not_attached() {
    let mut primitives = ruling_grid("g", 1, &[0.0, 100.0], &[0.0, 50.0]);
    primitives.push(text("stray", 1, 800.0, 800.0, "footer text"));

    let tables = TableDetector::with_defaults().detect(&primitives);
    assert_eq!(tables.len(), 1);
    assert!(tables[0].cell(0, 0).unwrap().source_text_ids.is_empty());
}

#[test]
fn detected_tables_serialize_for_structural_dump() {
    let mut primitives = ruling_grid("g", 1, &[0.0, 50.0, 100.0], &[0.0, 40.0]);
    primitives.push(text("t0", 1, 15.0, 15.0, "left"));

    let tables = TableDetector::with_defaults().detect(&primitives);
    let json = serde_json::to_string(&tables).unwrap();
    let back: Vec<gridline_core::DetectedTable> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tables);
}

#[test]
fn markdown_listing_renders_rows_by_cols() {
    let coords = [0.0, 60.0, 120.0];
    let mut primitives = ruling_grid("g", 1, &coords, &coords);
    primitives.push(text("t0", 1, 20.0, 25.0, "a"));
    primitives.push(text("t1", 1, 80.0, 25.0, "b"));

    let tables = TableDetector::with_defaults().detect(&primitives);
    let md = tables[0].to_markdown();
    let lines: Vec<&str> = md.lines().collect();
    // Header row, separator, one body row
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "| a | b |");
    assert_eq!(lines[1], "| --- | --- |");
}
