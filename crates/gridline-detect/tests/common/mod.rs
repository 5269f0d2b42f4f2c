//! Shared fixture builders for integration tests.

use gridline_core::Primitive;

/// Route pipeline logs through the test harness when `RUST_LOG` is set.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A thin stroked horizontal segment.
pub fn hline(id: &str, page: u32, x: f32, y: f32, len: f32) -> Primitive {
    Primitive::Line {
        id: id.to_string(),
        page,
        x,
        y,
        width: len,
        height: 0.4,
    }
}

/// A thin stroked vertical segment.
pub fn vline(id: &str, page: u32, x: f32, y: f32, len: f32) -> Primitive {
    Primitive::Line {
        id: id.to_string(),
        page,
        x,
        y,
        width: 0.4,
        height: len,
    }
}

/// A text run with a 20x10 bounding box at the given origin.
pub fn text(id: &str, page: u32, x: f32, y: f32, content: &str) -> Primitive {
    Primitive::Text {
        id: id.to_string(),
        page,
        x,
        y,
        width: 20.0,
        height: 10.0,
        content: content.to_string(),
    }
}

/// A complete ruling grid: one horizontal per y coordinate spanning the x
/// extent, one vertical per x coordinate spanning the y extent.
pub fn ruling_grid(prefix: &str, page: u32, xs: &[f32], ys: &[f32]) -> Vec<Primitive> {
    let x0 = xs[0];
    let x1 = xs[xs.len() - 1];
    let y0 = ys[0];
    let y1 = ys[ys.len() - 1];

    let mut primitives = Vec::new();
    for (i, &y) in ys.iter().enumerate() {
        primitives.push(hline(&format!("{prefix}-h{i}"), page, x0, y, x1 - x0));
    }
    for (i, &x) in xs.iter().enumerate() {
        primitives.push(vline(&format!("{prefix}-v{i}"), page, x, y0, y1 - y0));
    }
    primitives
}
