#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point, Viewport};
use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::ShapeKind;
use crate::handles::{HandleKind, HandlePositions};

/// Handle under `screen_pt`, if any.
///
/// Handles are hit in screen space so their grab radius does not change with
/// zoom. The nearest handle within [`HANDLE_RADIUS_PX`] wins; handles that
/// project behind the camera are skipped.
#[must_use]
pub fn hit_handle(
    screen_pt: Point,
    handles: &HandlePositions,
    camera: &Camera,
    viewport: Viewport,
) -> Option<(HandleKind, usize)> {
    handles
        .all()
        .into_iter()
        .filter_map(|(kind, index, world)| {
            let screen = camera.world_to_screen(world, viewport)?;
            Some((screen_pt.distance(screen), kind, index))
        })
        .filter(|(d, _, _)| *d <= HANDLE_RADIUS_PX)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, kind, index)| (kind, index))
}

/// CSS cursor for hovering or dragging a handle.
///
/// Corners 0 and 2 sit on the top-left/bottom-right diagonal, 1 and 3 on the
/// other. Polygon and polyline vertices use a crosshair.
#[must_use]
pub fn cursor_for(shape_kind: ShapeKind, handle: HandleKind, index: usize) -> &'static str {
    match (shape_kind, handle) {
        (ShapeKind::Polygon | ShapeKind::Polyline, HandleKind::Corner) => "crosshair",
        (_, HandleKind::Corner) if index % 2 == 0 => "nwse-resize",
        (_, HandleKind::Corner) => "nesw-resize",
        (_, HandleKind::Edge) if index % 2 == 0 => "ns-resize",
        (_, HandleKind::Edge) => "ew-resize",
        (_, HandleKind::Rotate) => "grab",
        (_, HandleKind::Body) => "grabbing",
    }
}
