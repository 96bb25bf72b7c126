//! Input model: modifier keys, pointer ids, and the session state machine.
//!
//! `InputState` is the single interaction session tracked between
//! pointer-down on a handle and pointer-up/cancel. An active [`Session`]
//! carries the originals snapshot every move is resolved against, the latest
//! live result, and the "did anything move" flag that decides whether release
//! writes history.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::doc::{ShapeGeometry, ShapeId, ShapeKind};
use crate::handles::HandleKind;

/// Host-assigned pointer identifier (the DOM `pointerId`).
pub type PointerId = i32;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held: aspect-lock on resize, angle snap on rotate.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held: suspends magnetic snapping.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    #[must_use]
    pub fn aspect_lock(self) -> bool {
        self.shift
    }

    #[must_use]
    pub fn angle_snap(self) -> bool {
        self.shift
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Which manipulation a session performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Dragging,
    Resizing,
    Rotating,
}

/// Per-kind session context.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOp {
    /// Translate every member by the pointer delta.
    Drag {
        /// World pointer position the delta is measured from; set by the first valid projection.
        anchor: Option<Point>,
    },
    /// Resize one shape by one handle.
    Resize {
        /// Shape type of the target, fixed for the session.
        kind: ShapeKind,
        /// Corner or edge.
        handle: HandleKind,
        /// Handle index within its family.
        index: usize,
    },
    /// Rotate one shape, or every member about a shared group center.
    Rotate {
        /// World-space rotation center.
        pivot: Point,
        /// Angle at session start (zero for a group).
        start_angle: f64,
        /// Pointer angle around `pivot` at session start; set by the first valid projection.
        start_pointer_angle: Option<f64>,
        /// Most recently resolved absolute angle.
        live_angle: f64,
        /// More than one member.
        group: bool,
    },
}

/// Snapshot of one shape taken at session start.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: ShapeId,
    pub original: ShapeGeometry,
}

/// An active drag, resize, or rotate interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Pointer that owns the session; other pointers are ignored.
    pub pointer_id: PointerId,
    /// Handle family that started the session.
    pub handle: HandleKind,
    /// Index of the handle that started the session.
    pub handle_index: usize,
    pub op: SessionOp,
    /// Originals, never mutated mid-session.
    pub members: Vec<Member>,
    /// Last valid live result, aligned with `members`.
    pub live: Option<Vec<ShapeGeometry>>,
    /// Last successfully projected pointer position.
    pub last_pointer: Option<Point>,
    /// Modifiers seen on the last pointer-move.
    pub modifiers: Modifiers,
    /// Set by the first pointer-move event, valid or not.
    pub moved: bool,
    /// Key point the pointer, or a dragged shape, is magnetically held to.
    pub snapped: Option<Point>,
}

impl Session {
    #[must_use]
    pub fn kind(&self) -> SessionKind {
        match self.op {
            SessionOp::Drag { .. } => SessionKind::Dragging,
            SessionOp::Resize { .. } => SessionKind::Resizing,
            SessionOp::Rotate { .. } => SessionKind::Rotating,
        }
    }

    /// Live geometry for `id` if it is a member and a live result exists.
    #[must_use]
    pub fn live_for(&self, id: &ShapeId) -> Option<&ShapeGeometry> {
        let index = self.members.iter().position(|m| m.id == *id)?;
        self.live.as_ref()?.get(index)
    }

    #[must_use]
    pub fn member_ids(&self) -> Vec<ShapeId> {
        self.members.iter().map(|m| m.id).collect()
    }
}

/// A session start deferred to the next frame after another session was exited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingStart {
    pub shape_id: ShapeId,
    pub handle: HandleKind,
    pub index: usize,
    pub pointer_id: PointerId,
    pub screen: Point,
}

/// Session state machine: `Idle -> Active -> Idle`, with `Pending` bridging a mode switch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No session; waiting for pointer-down on a handle.
    #[default]
    Idle,
    /// A session is running.
    Active(Session),
    /// The previous session was exited this frame; the next one starts on [`crate::engine::EngineCore::on_frame`].
    Pending(PendingStart),
}

impl InputState {
    /// Kind of the active session, if any.
    #[must_use]
    pub fn kind(&self) -> Option<SessionKind> {
        self.session().map(Session::kind)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle | Self::Pending(_) => None,
        }
    }

    /// Live geometry the active session shows for `id`.
    #[must_use]
    pub fn live_for(&self, id: &ShapeId) -> Option<&ShapeGeometry> {
        self.session().and_then(|s| s.live_for(id))
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
