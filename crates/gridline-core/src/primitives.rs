//! Page-description primitives supplied by the upstream document extractor
//!
//! The detector never parses the source document itself; it consumes a flat
//! list of primitives that an external collaborator has already decoded and
//! positioned in a single page-local planar coordinate system. Coordinates
//! use whatever units and vertical orientation the upstream extractor
//! produces; the detector only relies on min/max normalization, never on a
//! particular y-axis direction.

use serde::{Deserialize, Serialize};

/// A single page-description primitive.
///
/// Every variant carries a globally unique `id`, a 1-based `page` number,
/// and the axis-aligned bounding box of the drawn object. `Text` runs
/// additionally carry their glyph content.
///
/// # Examples
///
/// ```
/// use gridline_core::Primitive;
///
/// let ruling = Primitive::Line {
///     id: "l-0".to_string(),
///     page: 1,
///     x: 0.0,
///     y: 100.0,
///     width: 200.0,
///     height: 0.4,
/// };
/// assert_eq!(ruling.page(), 1);
/// assert!(!ruling.is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    /// A glyph run. Position is the run origin; width/height describe its
    /// bounding box.
    Text {
        /// Globally unique primitive identifier
        id: String,
        /// 1-based page number
        page: u32,
        /// Bounding-box origin x
        x: f32,
        /// Bounding-box origin y
        y: f32,
        /// Bounding-box width
        width: f32,
        /// Bounding-box height
        height: f32,
        /// Text content of the run
        content: String,
    },
    /// Axis-aligned bounding box of a stroked segment.
    Line {
        /// Globally unique primitive identifier
        id: String,
        /// 1-based page number
        page: u32,
        /// Bounding-box origin x
        x: f32,
        /// Bounding-box origin y
        y: f32,
        /// Bounding-box width
        width: f32,
        /// Bounding-box height
        height: f32,
    },
    /// Axis-aligned bounding box of a stroked or filled rectangle. A thin
    /// rectangle (one dimension near zero) often represents a ruling line.
    Rect {
        /// Globally unique primitive identifier
        id: String,
        /// 1-based page number
        page: u32,
        /// Bounding-box origin x
        x: f32,
        /// Bounding-box origin y
        y: f32,
        /// Bounding-box width
        width: f32,
        /// Bounding-box height
        height: f32,
    },
}

impl Primitive {
    /// The primitive's globally unique identifier.
    #[inline]
    #[must_use = "returns the primitive id"]
    pub fn id(&self) -> &str {
        match self {
            Self::Text { id, .. } | Self::Line { id, .. } | Self::Rect { id, .. } => id,
        }
    }

    /// The 1-based page number this primitive appears on.
    #[inline]
    #[must_use = "returns the page number"]
    pub fn page(&self) -> u32 {
        match self {
            Self::Text { page, .. } | Self::Line { page, .. } | Self::Rect { page, .. } => *page,
        }
    }

    /// Bounding box as `(x, y, width, height)`.
    #[inline]
    #[must_use = "returns the bounding box"]
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        match self {
            Self::Text {
                x, y, width, height, ..
            }
            | Self::Line {
                x, y, width, height, ..
            }
            | Self::Rect {
                x, y, width, height, ..
            } => (*x, *y, *width, *height),
        }
    }

    /// Whether this primitive is a text run.
    #[inline]
    #[must_use = "returns whether the primitive is a text run"]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Text content, if this is a text run.
    #[inline]
    #[must_use = "returns the text content for Text primitives"]
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}
