//! Shared numeric constants for the canvas crate.

// ── Projection ──────────────────────────────────────────────────

/// Height of the ground plane in 3D world space.
pub const GROUND_PLANE_Y: f64 = 0.0;

/// A ray whose unit direction has a vertical component at or below this is
/// treated as parallel to the ground plane.
pub const PARALLEL_RAY_EPSILON: f64 = 1e-9;

// ── Size limits ─────────────────────────────────────────────────

/// Minimum edge length of a resized shape, in world units.
pub const MIN_EDGE: f64 = 1.0;

/// Minimum area of a resized shape, in square world units.
pub const MIN_AREA: f64 = 10.0;

// ── Rotation ────────────────────────────────────────────────────

/// Angle increment used when rotation snapping is active.
pub const SNAP_INCREMENT_DEG: f64 = 45.0;

/// Distance from the bottom of the bounding box to the rotate handle, in world units.
pub const ROTATE_HANDLE_OFFSET: f64 = 2.0;

// ── Circles ─────────────────────────────────────────────────────

/// Segment count of the perimeter approximation used for ellipses.
pub const ELLIPSE_SEGMENTS: usize = 48;

// ── Hit-testing and snapping ────────────────────────────────────

/// Screen-space hit slop in pixels for handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// World-space distance within which magnetic snapping engages.
pub const SNAP_THRESHOLD: f64 = 0.5;

// ── History ─────────────────────────────────────────────────────

/// Maximum number of undo entries retained by the document store.
pub const HISTORY_LIMIT: usize = 100;
