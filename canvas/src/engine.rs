//! Interaction session manager.
//!
//! [`EngineCore`] owns the one interaction session that may exist at a time.
//! Pointer-down on a handle starts a session, every pointer-move resolves a
//! fresh live result from the session's originals and pushes it to the store's
//! live overlay, and pointer-up commits it as a single history entry. Host side
//! effects (pointer capture, cursor, redraw) come back as [`Action`]s.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::camera::{Camera, Point, Viewport};
use crate::config::EngineConfig;
use crate::doc::{DocStore, Selection, Shape, ShapeGeometry, ShapeId, ShapeKind, ShapeStore};
use crate::error::EngineError;
use crate::geom::{Bounds, angle_deg, normalize_deg};
use crate::handles::{
    HandleKind, HandlePositions, compute_group_handles, compute_handles, compute_render_points, group_bounds,
    handle_count, local_outline, midpoint_indicators,
};
use crate::hit::{cursor_for, hit_handle};
use crate::input::{InputState, Key, Member, Modifiers, PendingStart, PointerId, Session, SessionKind, SessionOp};
use crate::measure::{DimensionLabel, dimension_labels, shape_area};
use crate::resolve::{FlipAxis, ResizeOptions, flip, reorient, resolve_resize, resolve_rotation, translate, validate};
use crate::snap::{geometry_key_points, snap_candidates, snap_pair, snap_point};

const DEFAULT_CURSOR: &str = "default";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Route all further events for this pointer to the engine.
    CapturePointer(PointerId),
    /// Undo a previous `CapturePointer`.
    ReleasePointer(PointerId),
    SetCursor(&'static str),
    RenderNeeded,
    /// Committed geometry changed for these shapes; one history entry was written.
    Committed { shape_ids: Vec<ShapeId> },
    /// A session ended without a commit; these shapes show their committed geometry again.
    Cancelled { shape_ids: Vec<ShapeId> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Commit,
    Discard,
}

/// Why a pointer-down did not start a session.
enum Refusal {
    Ineligible(&'static str),
    Invalid(EngineError),
}

/// Core engine state: the store, the view, and the session state machine.
pub struct EngineCore<S: ShapeStore = DocStore> {
    pub store: S,
    pub camera: Camera,
    pub viewport: Viewport,
    pub config: EngineConfig,
    input: InputState,
    capture: Option<PointerId>,
}

impl EngineCore<DocStore> {
    /// Engine over an empty [`DocStore`] with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Engine over an empty [`DocStore`] sized by `config.history_limit`.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_store(DocStore::with_history_limit(config.history_limit), config)
    }

    // --- History ---

    /// Revert the last committed entry. Ignored while a session is running.
    pub fn undo(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!("undo ignored during a session");
            return Vec::new();
        }
        history_actions(self.store.undo())
    }

    /// Re-apply the last undone entry. Ignored while a session is running.
    pub fn redo(&mut self) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!("redo ignored during a session");
            return Vec::new();
        }
        history_actions(self.store.redo())
    }
}

impl Default for EngineCore<DocStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ShapeStore> EngineCore<S> {
    #[must_use]
    pub fn with_store(store: S, config: EngineConfig) -> Self {
        Self {
            store,
            camera: Camera::default(),
            viewport: Viewport::default(),
            config,
            input: InputState::Idle,
            capture: None,
        }
    }

    // --- Input events ---

    /// Pointer-down on handle `(handle, index)` of `shape_id`.
    ///
    /// Starts a session from `Idle`. While a session runs, a different pointer
    /// is rejected and the owning pointer is ignored, except that a resize
    /// handle pressed during a rotation exits the rotation now and enters the
    /// resize on the next [`Self::on_frame`].
    pub fn on_handle_pointer_down(
        &mut self,
        shape_id: ShapeId,
        handle: HandleKind,
        index: usize,
        pointer_id: PointerId,
        screen: Point,
    ) -> Vec<Action> {
        let start = PendingStart { shape_id, handle, index, pointer_id, screen };
        let active = match &self.input {
            InputState::Idle => None,
            InputState::Pending(pending) => {
                debug!(pointer_id, owner = pending.pointer_id, "session start already pending; pointer-down ignored");
                return Vec::new();
            }
            InputState::Active(session) => Some((session.pointer_id, session.kind())),
        };
        match active {
            None => self.start_session(start),
            Some((owner, _)) if owner != pointer_id => {
                debug!(pointer_id, owner, "session conflict; pointer-down rejected");
                Vec::new()
            }
            Some((_, SessionKind::Rotating)) if is_resize_handle(handle) => {
                debug!(shape_id = %shape_id, pointer_id, "leaving rotate for resize; entry deferred to next frame");
                let actions = self.end_session(Exit::Discard);
                self.input = InputState::Pending(start);
                actions
            }
            Some(_) => {
                debug!(pointer_id, "pointer already owns the session; pointer-down ignored");
                Vec::new()
            }
        }
    }

    /// Pointer-move from `pointer_id` at `screen`.
    ///
    /// A move that misses the ground plane marks the session as moved but
    /// otherwise changes nothing; the last live result stays in place.
    pub fn on_pointer_move(&mut self, pointer_id: PointerId, screen: Point, modifiers: Modifiers) -> Vec<Action> {
        let Some(mut session) = self.take_session() else {
            return Vec::new();
        };
        if session.pointer_id != pointer_id {
            trace!(pointer_id, owner = session.pointer_id, "move from non-owning pointer ignored");
            self.input = InputState::Active(session);
            return Vec::new();
        }
        session.moved = true;
        session.modifiers = modifiers;
        let actions = self.track(&mut session, screen);
        self.input = InputState::Active(session);
        actions
    }

    /// Pointer-up: commit the session if anything moved.
    pub fn on_pointer_up(&mut self, pointer_id: PointerId) -> Vec<Action> {
        if self.owner() != Some(pointer_id) {
            return Vec::new();
        }
        if self.input.session().is_some() {
            return self.end_session(Exit::Commit);
        }
        debug!(pointer_id, "pointer released before the deferred session started");
        self.input = InputState::Idle;
        Vec::new()
    }

    /// Pointer-cancel (palm rejection, OS gesture).
    ///
    /// Rotation is discarded. Drag and resize commit when any movement occurred.
    pub fn on_pointer_cancel(&mut self, pointer_id: PointerId) -> Vec<Action> {
        if self.owner() != Some(pointer_id) {
            return Vec::new();
        }
        match self.input.kind() {
            Some(SessionKind::Rotating) => self.end_session(Exit::Discard),
            Some(SessionKind::Dragging | SessionKind::Resizing) => self.end_session(Exit::Commit),
            None => {
                debug!(pointer_id, "pointer cancelled before the deferred session started");
                self.input = InputState::Idle;
                Vec::new()
            }
        }
    }

    /// Key press. `Escape` cancels any session and restores the originals.
    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_escape() {
            return Vec::new();
        }
        if self.input.session().is_some() {
            return self.end_session(Exit::Discard);
        }
        if matches!(self.input, InputState::Pending(_)) {
            debug!("deferred session start cancelled");
            self.input = InputState::Idle;
        }
        Vec::new()
    }

    /// Per-frame tick. Enters a session deferred by a mode switch.
    pub fn on_frame(&mut self) -> Vec<Action> {
        let InputState::Pending(start) = &self.input else {
            return Vec::new();
        };
        let start = *start;
        self.input = InputState::Idle;
        debug!(shape_id = %start.shape_id, handle = ?start.handle, "entering deferred session");
        self.start_session(start)
    }

    /// Drop any session and release pointer capture. Call when the host view goes away.
    pub fn teardown(&mut self) -> Vec<Action> {
        let mut actions = if self.input.session().is_some() {
            self.end_session(Exit::Discard)
        } else {
            self.input = InputState::Idle;
            Vec::new()
        };
        actions.extend(self.release());
        actions
    }

    // --- Commands ---

    /// Mirror every manipulable selected shape about the selection's bounding-box center.
    ///
    /// Writes one history entry. Ignored while a session is running.
    pub fn flip_selection(&mut self, axis: FlipAxis) -> Vec<Action> {
        if !self.input.is_idle() {
            debug!("flip ignored during a session");
            return Vec::new();
        }
        let selection = self.store.selection();
        let shapes: Vec<&Shape> = selection
            .ids
            .iter()
            .filter_map(|id| self.store.shape(id))
            .filter(|s| self.is_manipulable(s) && s.geometry().is_valid())
            .collect();
        let Some(bounds) = group_bounds(&shapes, &self.input, &self.config) else {
            return Vec::new();
        };
        let about = bounds.center();
        let edits: Vec<(ShapeId, ShapeGeometry)> =
            shapes.iter().map(|s| (s.id, flip(&s.geometry(), axis, about))).collect();
        let shape_ids: Vec<ShapeId> = edits.iter().map(|(id, _)| *id).collect();
        if !self.store.commit(edits) {
            warn!(?axis, "flip rejected by store");
            return Vec::new();
        }
        debug!(?axis, shapes = shape_ids.len(), "selection flipped");
        vec![Action::Committed { shape_ids }, Action::RenderNeeded]
    }

    // --- Queries ---

    #[must_use]
    pub fn input(&self) -> &InputState {
        &self.input
    }

    #[must_use]
    pub fn session_kind(&self) -> Option<SessionKind> {
        self.input.kind()
    }

    /// Key point the session is magnetically held to, for a "snapped" indicator.
    #[must_use]
    pub fn snapped(&self) -> Option<Point> {
        self.input.session().and_then(|s| s.snapped)
    }

    /// Handles for one shape, empty when locked or hidden.
    #[must_use]
    pub fn handles(&self, id: &ShapeId) -> HandlePositions {
        match self.store.shape(id) {
            Some(shape) if self.store.layer_visible(&shape.layer_id) => compute_handles(shape, &self.input, &self.config),
            _ => HandlePositions::default(),
        }
    }

    /// Rotation handle for a multi-selection; empty otherwise.
    #[must_use]
    pub fn group_handles(&self) -> HandlePositions {
        let selection = self.store.selection();
        if !selection.is_multi() {
            return HandlePositions::default();
        }
        let shapes: Vec<&Shape> = selection
            .ids
            .iter()
            .filter_map(|id| self.store.shape(id))
            .filter(|s| self.store.layer_visible(&s.layer_id))
            .collect();
        compute_group_handles(&shapes, &self.input, &self.config)
    }

    /// Outline to draw for `id`, following the live session.
    #[must_use]
    pub fn render_points(&self, id: &ShapeId) -> Vec<Point> {
        self.store
            .shape(id)
            .map(|s| compute_render_points(s, &self.input, &self.config))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn dimension_labels(&self, id: &ShapeId) -> Vec<DimensionLabel> {
        self.store
            .shape(id)
            .map(|s| dimension_labels(s, &self.input, &self.config))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn area(&self, id: &ShapeId) -> Option<f64> {
        self.store.shape(id).map(|s| shape_area(s, &self.input))
    }

    /// Polygon/polyline edge midpoints for midpoint indicators.
    #[must_use]
    pub fn midpoints(&self, id: &ShapeId) -> Vec<Point> {
        self.store.shape(id).map(|s| midpoint_indicators(s, &self.input)).unwrap_or_default()
    }

    /// Handle of the current selection under `screen`, addressed for [`Self::on_handle_pointer_down`].
    ///
    /// A multi-selection exposes only its group rotation handle, reported on the primary shape.
    #[must_use]
    pub fn handle_at(&self, screen: Point) -> Option<(ShapeId, HandleKind, usize)> {
        let selection = self.store.selection();
        let primary = selection.primary?;
        let handles = if selection.is_multi() { self.group_handles() } else { self.handles(&primary) };
        hit_handle(screen, &handles, &self.camera, self.viewport).map(|(kind, index)| (primary, kind, index))
    }

    // --- Session lifecycle ---

    fn owner(&self) -> Option<PointerId> {
        match &self.input {
            InputState::Idle => None,
            InputState::Active(session) => Some(session.pointer_id),
            InputState::Pending(pending) => Some(pending.pointer_id),
        }
    }

    fn take_session(&mut self) -> Option<Session> {
        match std::mem::take(&mut self.input) {
            InputState::Active(session) => Some(session),
            other => {
                self.input = other;
                None
            }
        }
    }

    fn start_session(&mut self, start: PendingStart) -> Vec<Action> {
        let (session, cursor) = match self.build_session(&start) {
            Ok(built) => built,
            Err(Refusal::Ineligible(reason)) => {
                debug!(shape_id = %start.shape_id, handle = ?start.handle, reason, "session not started");
                return Vec::new();
            }
            Err(Refusal::Invalid(err)) => {
                warn!(shape_id = %start.shape_id, error = %err, "session not started");
                return Vec::new();
            }
        };
        debug!(
            kind = ?session.kind(),
            shape_id = %start.shape_id,
            pointer_id = start.pointer_id,
            members = session.members.len(),
            "session started"
        );
        self.input = InputState::Active(session);
        let mut actions = self.capture(start.pointer_id);
        actions.push(Action::SetCursor(cursor));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn build_session(&self, start: &PendingStart) -> Result<(Session, &'static str), Refusal> {
        let shape =
            self.store.shape(&start.shape_id).ok_or(Refusal::Invalid(EngineError::UnknownShape(start.shape_id)))?;
        if !self.is_manipulable(shape) {
            return Err(Refusal::Ineligible("shape is locked or hidden"));
        }
        let selection = self.store.selection();
        if !selection.contains(&shape.id) {
            return Err(Refusal::Ineligible("shape is not selected"));
        }
        let geometry = shape.geometry();
        validate(shape.id, &geometry).map_err(Refusal::Invalid)?;
        let world = self.camera.screen_to_world(start.screen, self.viewport);

        let (op, members) = match start.handle {
            HandleKind::Corner | HandleKind::Edge => {
                if selection.is_multi() {
                    return Err(Refusal::Ineligible("resize needs a single selection"));
                }
                if start.index >= handle_count(shape.kind, start.handle, &geometry) {
                    return Err(Refusal::Invalid(EngineError::HandleOutOfRange {
                        kind: start.handle,
                        index: start.index,
                    }));
                }
                let op = SessionOp::Resize { kind: shape.kind, handle: start.handle, index: start.index };
                (op, vec![Member { id: shape.id, original: geometry }])
            }
            HandleKind::Body => (SessionOp::Drag { anchor: world }, self.members_for(shape, &selection)),
            HandleKind::Rotate => {
                let members = self.members_for(shape, &selection);
                let group = members.len() > 1;
                let (pivot, start_angle) = if group {
                    let center = self.group_center(&members).ok_or(Refusal::Ineligible("group has no extent"))?;
                    (center, 0.0)
                } else {
                    single_pivot(shape.kind, &geometry, self.config.segments())
                        .ok_or(Refusal::Invalid(EngineError::TooFewPoints { shape_id: shape.id, count: 0 }))?
                };
                let op = SessionOp::Rotate {
                    pivot,
                    start_angle,
                    start_pointer_angle: world.map(|w| angle_deg(pivot, w)),
                    live_angle: start_angle,
                    group,
                };
                (op, members)
            }
        };

        let session = Session {
            pointer_id: start.pointer_id,
            handle: start.handle,
            handle_index: start.index,
            op,
            members,
            live: None,
            last_pointer: None,
            modifiers: Modifiers::default(),
            moved: false,
            snapped: None,
        };
        Ok((session, cursor_for(shape.kind, start.handle, start.index)))
    }

    /// Shapes a drag or rotate on `shape` moves: every manipulable member of a
    /// multi-selection, or just `shape`.
    fn members_for(&self, shape: &Shape, selection: &Selection) -> Vec<Member> {
        if !selection.is_multi() {
            return vec![Member { id: shape.id, original: shape.geometry() }];
        }
        selection
            .ids
            .iter()
            .filter_map(|id| self.store.shape(id))
            .filter(|s| self.is_manipulable(s))
            .filter_map(|s| {
                let original = s.geometry();
                match validate(s.id, &original) {
                    Ok(()) => Some(Member { id: s.id, original }),
                    Err(err) => {
                        warn!(shape_id = %s.id, error = %err, "group member skipped");
                        None
                    }
                }
            })
            .collect()
    }

    fn group_center(&self, members: &[Member]) -> Option<Point> {
        let shapes: Vec<&Shape> = members.iter().filter_map(|m| self.store.shape(&m.id)).collect();
        group_bounds(&shapes, &self.input, &self.config).map(|b| b.center())
    }

    fn is_manipulable(&self, shape: &Shape) -> bool {
        shape.visible && !self.store.is_locked(&shape.id) && self.store.layer_visible(&shape.layer_id)
    }

    /// Project, snap, resolve, and push the live result for one pointer-move.
    fn track(&mut self, session: &mut Session, screen: Point) -> Vec<Action> {
        let Some(world) = self.camera.screen_to_world(screen, self.viewport) else {
            trace!(x = screen.x, y = screen.y, "pointer missed the ground plane; move skipped");
            return Vec::new();
        };
        let pointer = self.magnetic_snap(session, world);
        session.last_pointer = Some(pointer);
        match self.resolve(session, pointer) {
            Ok(live) => {
                for (member, geometry) in session.members.iter().zip(&live) {
                    if !self.store.update_live(&member.id, geometry.clone()) {
                        warn!(shape_id = %member.id, "live update rejected by store");
                    }
                }
                session.live = Some(live);
                vec![Action::RenderNeeded]
            }
            Err(err) => {
                warn!(error = %err, "resolve failed; keeping last live result");
                Vec::new()
            }
        }
    }

    fn magnetic_snap(&self, session: &mut Session, world: Point) -> Point {
        if !self.config.magnetic_snap || session.modifiers.alt || session.kind() == SessionKind::Rotating {
            session.snapped = None;
            return world;
        }
        let shapes: Vec<&Shape> =
            self.store.shapes().into_iter().filter(|s| self.store.layer_visible(&s.layer_id)).collect();
        let candidates = snap_candidates(&shapes, &session.member_ids(), &self.config);
        if let SessionOp::Drag { anchor } = &mut session.op {
            let delta = world - *anchor.get_or_insert(world);
            let moving: Vec<Point> = session
                .members
                .iter()
                .filter_map(|m| self.store.shape(&m.id).map(|s| geometry_key_points(s.kind, &m.original, &self.config)))
                .flatten()
                .collect();
            let pair = snap_pair(&moving, delta, &candidates, self.config.snap_threshold);
            session.snapped = pair.map(|(_, target)| target);
            return pair.map_or(world, |(point, target)| world + (target - point));
        }
        session.snapped = snap_point(world, &candidates, self.config.snap_threshold);
        session.snapped.unwrap_or(world)
    }

    /// Resolve every member from its original against `pointer`.
    fn resolve(&self, session: &mut Session, pointer: Point) -> Result<Vec<ShapeGeometry>, EngineError> {
        let results: Vec<ShapeGeometry> = match &mut session.op {
            SessionOp::Drag { anchor } => {
                let delta = pointer - *anchor.get_or_insert(pointer);
                session.members.iter().map(|m| translate(&m.original, delta)).collect()
            }
            SessionOp::Resize { kind, handle, index } => {
                let options = ResizeOptions::from_config(&self.config, session.modifiers.aspect_lock());
                session
                    .members
                    .iter()
                    .map(|m| resolve_resize(m.id, *kind, &m.original, *handle, *index, pointer, &options))
                    .collect::<Result<_, _>>()?
            }
            SessionOp::Rotate { pivot, start_angle, start_pointer_angle, live_angle, group } => {
                let current = angle_deg(*pivot, pointer);
                let start = *start_pointer_angle.get_or_insert(current);
                let snap = session.modifiers.angle_snap().then_some(self.config.snap_increment_deg);
                let angle = resolve_rotation(*start_angle, start, current, snap);
                *live_angle = angle;
                session
                    .members
                    .iter()
                    .map(|m| {
                        let target =
                            if *group { normalize_deg(m.original.rotation.map_or(0.0, |r| r.angle) + angle) } else { angle };
                        reorient(&m.original, *pivot, target)
                    })
                    .collect()
            }
        };
        if let Some((member, _)) = session.members.iter().zip(&results).find(|(_, g)| !g.is_valid()) {
            return Err(EngineError::NonFiniteGeometry { shape_id: member.id });
        }
        Ok(results)
    }

    /// Leave the active session through any exit path. Always releases capture.
    fn end_session(&mut self, exit: Exit) -> Vec<Action> {
        let Some(session) = self.take_session() else {
            return Vec::new();
        };
        let shape_ids = session.member_ids();
        let mut actions: Vec<Action> = self.release().into_iter().collect();
        actions.push(Action::SetCursor(DEFAULT_CURSOR));
        match exit {
            Exit::Commit if session.moved => actions.push(self.commit_session(&session)),
            Exit::Commit => {
                debug!(kind = ?session.kind(), "no movement; nothing committed");
                self.clear_live(&shape_ids);
            }
            Exit::Discard => {
                debug!(kind = ?session.kind(), shapes = shape_ids.len(), "session cancelled");
                self.clear_live(&shape_ids);
                actions.push(Action::Cancelled { shape_ids });
            }
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    fn commit_session(&mut self, session: &Session) -> Action {
        let shape_ids = session.member_ids();
        let Some(results) = self.final_geometry(session) else {
            warn!(kind = ?session.kind(), "no valid result; original geometry kept");
            self.clear_live(&shape_ids);
            return Action::Cancelled { shape_ids };
        };
        let edits: Vec<(ShapeId, ShapeGeometry)> = shape_ids.iter().copied().zip(results).collect();
        if !self.store.commit(edits) {
            warn!(kind = ?session.kind(), "commit rejected by store");
            self.clear_live(&shape_ids);
            return Action::Cancelled { shape_ids };
        }
        debug!(kind = ?session.kind(), shapes = shape_ids.len(), "session committed");
        Action::Committed { shape_ids }
    }

    /// Final geometry: the live result, else a recompute from the last
    /// projected pointer. `None` means only the originals are left.
    fn final_geometry(&self, session: &Session) -> Option<Vec<ShapeGeometry>> {
        let live = session
            .live
            .as_ref()
            .filter(|l| l.len() == session.members.len() && l.iter().all(ShapeGeometry::is_valid));
        if let Some(live) = live {
            return Some(live.clone());
        }
        let pointer = session.last_pointer?;
        warn!(kind = ?session.kind(), "live result missing; recomputing from last pointer");
        let mut replay = session.clone();
        match self.resolve(&mut replay, pointer) {
            Ok(results) => Some(results),
            Err(err) => {
                warn!(error = %err, "recompute failed");
                None
            }
        }
    }

    fn clear_live(&mut self, ids: &[ShapeId]) {
        for id in ids {
            self.store.clear_live(id);
        }
    }

    fn capture(&mut self, pointer_id: PointerId) -> Vec<Action> {
        let mut actions: Vec<Action> = self.release().into_iter().collect();
        self.capture = Some(pointer_id);
        actions.push(Action::CapturePointer(pointer_id));
        actions
    }

    fn release(&mut self) -> Option<Action> {
        self.capture.take().map(Action::ReleasePointer)
    }
}

fn is_resize_handle(handle: HandleKind) -> bool {
    matches!(handle, HandleKind::Corner | HandleKind::Edge)
}

/// Rotation center and starting angle for a single shape: its stored center,
/// else the center of its local outline.
fn single_pivot(kind: ShapeKind, geometry: &ShapeGeometry, segments: usize) -> Option<(Point, f64)> {
    if let Some(rotation) = geometry.rotation {
        return Some((rotation.center, rotation.angle));
    }
    Bounds::from_points(local_outline(kind, geometry, segments)).map(|b| (b.center(), 0.0))
}

fn history_actions(shape_ids: Vec<ShapeId>) -> Vec<Action> {
    if shape_ids.is_empty() {
        return Vec::new();
    }
    vec![Action::Committed { shape_ids }, Action::RenderNeeded]
}
