//! Classified grid rulings
//!
//! The geometry classifier turns raw line/rect primitives into
//! [`ClassifiedLine`]s: oriented, position-snapped segments that the
//! connectivity and grid stages operate on. Classified lines are created
//! fresh per detection pass and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a classified grid ruling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Runs along the x axis; the snapped position is a y coordinate.
    Horizontal,
    /// Runs along the y axis; the snapped position is an x coordinate.
    Vertical,
}

impl fmt::Display for Orientation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "horizontal"),
            Self::Vertical => write!(f, "vertical"),
        }
    }
}

/// An oriented line segment derived from a line/rect primitive.
///
/// `position` is the coordinate along the thin axis, snapped to the nearest
/// multiple of the configured snap step. `range_start..range_end` is the
/// extent along the long axis, carried over from the primitive unsnapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Id of the primitive this line was derived from
    pub source_id: String,
    /// Horizontal or vertical
    pub orientation: Orientation,
    /// Snapped coordinate along the thin axis
    pub position: f32,
    /// Start of the extent along the long axis
    pub range_start: f32,
    /// End of the extent along the long axis
    pub range_end: f32,
}

impl ClassifiedLine {
    /// Lower bound of the long-axis extent, regardless of stored order.
    #[inline]
    #[must_use = "returns the normalized range minimum"]
    pub fn range_min(&self) -> f32 {
        self.range_start.min(self.range_end)
    }

    /// Upper bound of the long-axis extent, regardless of stored order.
    #[inline]
    #[must_use = "returns the normalized range maximum"]
    pub fn range_max(&self) -> f32 {
        self.range_start.max(self.range_end)
    }

    /// Length of the extent along the long axis.
    #[inline]
    #[must_use = "returns the extent length"]
    pub fn length(&self) -> f32 {
        self.range_max() - self.range_min()
    }
}
