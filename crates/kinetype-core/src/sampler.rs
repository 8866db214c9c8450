//! Scroll geometry to normalized progress.

use serde::{Deserialize, Serialize};

use crate::easing::clamp;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A region's bounding box relative to the viewport top
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionBox {
    /// Offset of the region's top edge from the viewport top (negative once scrolled past)
    pub top: f64,
    pub height: f64,
}

impl RegionBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// How far the viewport has scrolled through `region`, in [0, 1].
///
/// A region no taller than the viewport has no scrollable excess and flips
/// from 0 to 1 once its top reaches the viewport top.
pub fn section_progress(region: RegionBox, viewport_height: f64) -> f64 {
    let max_scroll = region.height - viewport_height;
    if max_scroll.is_nan() || max_scroll <= 0.0 {
        return if region.top <= 0.0 { 1.0 } else { 0.0 };
    }
    let progress = -region.top / max_scroll;
    if progress.is_nan() {
        return 0.0;
    }
    clamp(progress, 0.0, 1.0)
}
