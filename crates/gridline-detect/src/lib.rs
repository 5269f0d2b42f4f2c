//! # Gridline Detect - Table Detection from Page Primitives
//!
//! Extracts structured tables from page-description primitives (text runs,
//! line segments, filled rectangles) obtained from a rendered document page.
//! The pipeline classifies raw vector primitives into grid rulings, clusters
//! them into candidate tables via connectivity, reconstructs a row/column
//! grid from ruling intersections, and re-associates text runs with grid
//! cells.
//!
//! Data flows one way: primitives → classified lines → connectivity graph →
//! grid → cells → tables. The detector never parses the source document,
//! never renders pixels, and never performs OCR; it assumes axis-aligned
//! grid rulings in a single planar coordinate space per page.
//!
//! ## Quick Start
//!
//! ```
//! use gridline_core::Primitive;
//! use gridline_detect::{DetectorConfigBuilder, TableDetector};
//!
//! # fn main() -> gridline_detect::Result<()> {
//! // Primitives come from an upstream document extractor
//! let primitives = vec![
//!     Primitive::Line { id: "h0".into(), page: 1, x: 0.0, y: 0.0, width: 200.0, height: 0.4 },
//!     Primitive::Line { id: "h1".into(), page: 1, x: 0.0, y: 100.0, width: 200.0, height: 0.4 },
//!     Primitive::Line { id: "v0".into(), page: 1, x: 0.0, y: 0.0, width: 0.4, height: 100.0 },
//!     Primitive::Line { id: "v1".into(), page: 1, x: 200.0, y: 0.0, width: 0.4, height: 100.0 },
//!     Primitive::Text {
//!         id: "t0".into(), page: 1,
//!         x: 80.0, y: 45.0, width: 40.0, height: 10.0,
//!         content: "Total".into(),
//!     },
//! ];
//!
//! let detector = TableDetector::with_defaults();
//! let tables = detector.detect(&primitives);
//!
//! assert_eq!(tables.len(), 1);
//! assert_eq!(tables[0].cell(0, 0).unwrap().text, "Total");
//!
//! // Tolerances are configurable for corpus tuning
//! let tuned = TableDetector::new(
//!     DetectorConfigBuilder::new().snap_step(1.0).build()?,
//! );
//! assert_eq!(tuned.detect(&primitives).len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Detection is a pure function of the primitive list and configuration:
//! pages are emitted in ascending page-number order, tables within a page in
//! ascending union-find root order, and per-cell text in primitive encounter
//! order. Running the detector twice on the same input yields identical
//! output.
//!
//! ## Concurrency
//!
//! The detector holds no mutable state; pages are independent, so an
//! embedding system may partition primitives by page and process pages in
//! parallel, as long as it re-sorts the combined output into page order to
//! preserve deterministic ids.

// Error types (public API)
pub mod error;

// Configuration
pub mod config;

// Pipeline stages
pub mod assign;
pub mod classify;
pub mod connectivity;
pub mod grid;
pub mod union_find;

// Orchestration
pub mod detector;

pub use config::{DetectorConfig, DetectorConfigBuilder};
pub use detector::TableDetector;
pub use error::{DetectError, Result};

// Re-export the data model so most consumers need only this crate
pub use gridline_core::{Cell, ClassifiedLine, DetectedTable, Orientation, Primitive};
