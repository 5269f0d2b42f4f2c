//! # Gridline Core - Data Model for Table Detection
//!
//! Core data types shared by the gridline table-detection pipeline and its
//! embedding applications:
//!
//! - [`Primitive`]: page-description primitives (text runs, line segments,
//!   filled rectangles) supplied by an upstream document extractor
//! - [`ClassifiedLine`]: an oriented, position-snapped grid ruling derived
//!   from a line/rect primitive
//! - [`Cell`] / [`DetectedTable`]: the reconstructed row/column grid with
//!   re-associated text, the primary output of detection
//! - [`geometry`]: the shared tolerance-bucketing helpers (`snap_to`,
//!   `dedup_within`) used wherever near-equal coordinates must collapse
//!
//! All public types derive `Serialize`/`Deserialize` so consumers can persist
//! or dump structures as JSON without additional glue.
//!
//! The detection pipeline itself lives in the `gridline-detect` crate; this
//! crate has no behavior beyond the data model and pure geometry arithmetic.

pub mod geometry;
pub mod line;
pub mod primitives;
pub mod table;

pub use line::{ClassifiedLine, Orientation};
pub use primitives::Primitive;
pub use table::{Cell, DetectedTable};
