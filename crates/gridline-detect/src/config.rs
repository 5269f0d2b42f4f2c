//! Detector configuration
//!
//! Every tolerance and threshold the pipeline uses is a named field here.
//! The defaults are empirically chosen values tuned on real document
//! corpora; they have no derivation, so they are kept overridable rather
//! than hard-coded — retuning for a new corpus must not require touching
//! the algorithm.

use crate::error::{DetectError, Result};
use serde::{Deserialize, Serialize};

/// Tolerances and thresholds for the detection pipeline.
///
/// Construct via [`DetectorConfig::default`] for the standard values or
/// [`DetectorConfigBuilder`] to override individual fields with validation.
///
/// # Examples
///
/// ```
/// use gridline_detect::{DetectorConfig, DetectorConfigBuilder};
///
/// # fn main() -> gridline_detect::Result<()> {
/// let standard = DetectorConfig::default();
/// assert_eq!(standard.snap_step, 1.5);
///
/// let tuned = DetectorConfigBuilder::new()
///     .snap_step(1.0)
///     .intersection_tolerance(2.0)
///     .build()?;
/// assert_eq!(tuned.snap_step, 1.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Primitives with both |width| and |height| below this are dots/noise
    /// and never become rulings (default: 0.5)
    pub min_stroke: f32,
    /// A dimension below this counts as the thin axis of a ruling
    /// (default: 3.0)
    pub thin_axis_max: f32,
    /// The long axis must exceed this for aspect-ratio classification to
    /// apply (default: 5.0)
    pub long_axis_min: f32,
    /// Minimum long/thin ratio for aspect-ratio classification
    /// (default: 4.0)
    pub min_aspect_ratio: f32,
    /// Thin-axis positions snap to the nearest multiple of this step, and
    /// grid coordinates within it deduplicate (default: 1.5)
    pub snap_step: f32,
    /// Slack applied to line extents when testing horizontal/vertical
    /// intersection (default: 3.0)
    pub intersection_tolerance: f32,
    /// Inclusive slack on all four cell edges when attaching text centroids
    /// (default: 1.0)
    pub text_attach_tolerance: f32,
}

impl Default for DetectorConfig {
    #[inline]
    fn default() -> Self {
        Self {
            min_stroke: 0.5,
            thin_axis_max: 3.0,
            long_axis_min: 5.0,
            min_aspect_ratio: 4.0,
            snap_step: 1.5,
            intersection_tolerance: 3.0,
            text_attach_tolerance: 1.0,
        }
    }
}

/// Builder for [`DetectorConfig`] with validation.
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfigBuilder {
    config: DetectorConfig,
}

impl Default for DetectorConfigBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DetectorConfigBuilder {
    /// Create a builder seeded with the standard tolerances.
    #[inline]
    #[must_use = "returns a new builder with default settings"]
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
        }
    }

    /// Create a builder for dense rulings: tighter snapping and
    /// intersection slack so closely spaced grid lines stay distinct.
    #[must_use = "returns a builder tuned for dense rulings"]
    pub fn strict() -> Self {
        Self::new().snap_step(0.75).intersection_tolerance(1.5)
    }

    /// Set the dot/noise threshold.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn min_stroke(mut self, value: f32) -> Self {
        self.config.min_stroke = value;
        self
    }

    /// Set the thin-axis maximum.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn thin_axis_max(mut self, value: f32) -> Self {
        self.config.thin_axis_max = value;
        self
    }

    /// Set the long-axis minimum.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn long_axis_min(mut self, value: f32) -> Self {
        self.config.long_axis_min = value;
        self
    }

    /// Set the minimum long/thin aspect ratio.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn min_aspect_ratio(mut self, value: f32) -> Self {
        self.config.min_aspect_ratio = value;
        self
    }

    /// Set the snap/dedup step.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn snap_step(mut self, value: f32) -> Self {
        self.config.snap_step = value;
        self
    }

    /// Set the intersection tolerance.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn intersection_tolerance(mut self, value: f32) -> Self {
        self.config.intersection_tolerance = value;
        self
    }

    /// Set the text-attachment tolerance.
    #[inline]
    #[must_use = "builder methods return the updated builder"]
    pub fn text_attach_tolerance(mut self, value: f32) -> Self {
        self.config.text_attach_tolerance = value;
        self
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::InvalidConfig`] if any tolerance or threshold
    /// is not a positive finite number.
    pub fn build(self) -> Result<DetectorConfig> {
        let c = self.config;
        let fields = [
            ("min_stroke", c.min_stroke),
            ("thin_axis_max", c.thin_axis_max),
            ("long_axis_min", c.long_axis_min),
            ("min_aspect_ratio", c.min_aspect_ratio),
            ("snap_step", c.snap_step),
            ("intersection_tolerance", c.intersection_tolerance),
            ("text_attach_tolerance", c.text_attach_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(DetectError::InvalidConfig {
                    reason: format!("{name} must be a positive finite number, got {value}"),
                });
            }
        }
        Ok(c)
    }
}
