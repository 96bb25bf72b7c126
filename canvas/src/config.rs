//! Engine tunables.
//!
//! Every field has a default from [`crate::consts`]; hosts override individual
//! values by deserializing a partial document (`#[serde(default)]`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    ELLIPSE_SEGMENTS, HISTORY_LIMIT, MIN_AREA, MIN_EDGE, ROTATE_HANDLE_OFFSET, SNAP_INCREMENT_DEG, SNAP_THRESHOLD,
};

/// Minimum dimensions enforced on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimits {
    pub min_edge: f64,
    pub min_area: f64,
}

impl SizeLimits {
    /// Side of the square produced when a resize collapses to zero area.
    #[must_use]
    pub fn min_square_side(self) -> f64 {
        self.min_area.sqrt().max(self.min_edge)
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self { min_edge: MIN_EDGE, min_area: MIN_AREA }
    }
}

/// Runtime configuration for [`crate::engine::EngineCore`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Minimum edge length in world units.
    pub min_edge: f64,
    /// Minimum area in square world units.
    pub min_area: f64,
    /// Rotation snap step in degrees.
    pub snap_increment_deg: f64,
    /// Perimeter segment count for ellipses.
    pub ellipse_segments: usize,
    /// Gap between the bounding box and the rotate handle, in world units.
    pub rotate_handle_offset: f64,
    /// Snap the pointer to nearby key points of other shapes while dragging or resizing.
    pub magnetic_snap: bool,
    /// Magnetic snap radius in world units.
    pub snap_threshold: f64,
    /// Maximum undo entries kept by [`crate::doc::DocStore`].
    pub history_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_edge: MIN_EDGE,
            min_area: MIN_AREA,
            snap_increment_deg: SNAP_INCREMENT_DEG,
            ellipse_segments: ELLIPSE_SEGMENTS,
            rotate_handle_offset: ROTATE_HANDLE_OFFSET,
            magnetic_snap: false,
            snap_threshold: SNAP_THRESHOLD,
            history_limit: HISTORY_LIMIT,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn limits(&self) -> SizeLimits {
        SizeLimits { min_edge: self.min_edge, min_area: self.min_area }
    }

    /// Ellipse segment count, never below the triangle minimum.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.ellipse_segments.max(3)
    }
}
