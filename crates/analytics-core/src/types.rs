// File: crates/analytics-core/src/types.rs
// Summary: Shared types and constants (viewport sizes, paddings).

use serde::{Deserialize, Serialize};

/// Default chart width in pixels.
pub const WIDTH: f64 = 360.0;
/// Default chart height in pixels.
pub const HEIGHT: f64 = 220.0;
/// Default inner padding in pixels.
pub const PADDING: f64 = 32.0;

/// Drawing surface reported by the host.
/// Contract: `width == 0` means the host has not finished a layout pass yet;
/// builders emit nothing until a real width arrives. The same holds for any
/// non-finite dimension or a negative padding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self { width, height, padding }
    }

    /// Same surface with a different width (e.g. after a layout report).
    pub const fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// True when the surface can hold geometry at all.
    pub fn is_ready(&self) -> bool {
        self.width.is_finite()
            && self.width > 0.0
            && self.height.is_finite()
            && self.height > 0.0
            && self.padding.is_finite()
            && self.padding >= 0.0
    }

    /// Horizontal extent between the paddings, never negative.
    pub fn plot_width(&self) -> f64 { (self.width - 2.0 * self.padding).max(0.0) }
    /// Vertical extent between the paddings, never negative.
    pub fn plot_height(&self) -> f64 { (self.height - 2.0 * self.padding).max(0.0) }
    /// Y coordinate of the value axis origin.
    pub fn baseline(&self) -> f64 { self.height - self.padding }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, PADDING)
    }
}
