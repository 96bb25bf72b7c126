//! Document model: parcel shapes, selection, and the shape store.
//!
//! This module defines the persisted [`Shape`] record, the geometry slice the
//! engine rewrites ([`ShapeGeometry`]), the [`ShapeStore`] seam the session
//! manager talks to, and [`DocStore`], an in-memory store with a live overlay
//! and undo/redo history.
//!
//! Live updates land in the overlay only. A commit writes the overlay (or the
//! given geometry) into the committed records, bumps `modified`, and records a
//! single history entry for every shape it touched.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::{HashMap, HashSet};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::camera::Point;
use crate::consts::HISTORY_LIMIT;
use crate::geom::Rotation;

/// Unique identifier for a shape.
pub type ShapeId = Uuid;

/// Identifier of the layer a shape belongs to.
pub type LayerId = Uuid;

/// Shape type discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned (in local space) rectangle stored as two opposite corners.
    Rectangle,
    /// Circle (compact two-point form) or ellipse (perimeter form).
    Circle,
    /// Closed outline through every point.
    Polygon,
    /// Open path through every point.
    Polyline,
}

impl ShapeKind {
    /// Whether the outline closes back on its first point.
    #[must_use]
    pub fn is_closed(self) -> bool {
        !matches!(self, Self::Polyline)
    }
}

/// A parcel outline as stored in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: ShapeId,
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Local-space points; insertion order is significant.
    pub points: Vec<Point>,
    /// Optional rotation applied on top of `points`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    pub layer_id: LayerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<Uuid>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Milliseconds since the Unix epoch of the last committed change.
    #[serde(default)]
    pub modified: i64,
}

fn default_visible() -> bool {
    true
}

impl Shape {
    /// New unlocked, visible shape with a fresh id.
    #[must_use]
    pub fn new(kind: ShapeKind, points: Vec<Point>, layer_id: LayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            points,
            rotation: None,
            layer_id,
            group_id: None,
            locked: false,
            visible: true,
            modified: 0,
        }
    }

    /// Snapshot of the engine-mutable part of the record.
    #[must_use]
    pub fn geometry(&self) -> ShapeGeometry {
        ShapeGeometry { points: self.points.clone(), rotation: self.rotation }
    }

    fn set_geometry(&mut self, geometry: ShapeGeometry) {
        self.points = geometry.points;
        self.rotation = geometry.rotation;
    }
}

/// The engine-mutable slice of a [`Shape`]: local points plus rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeGeometry {
    pub points: Vec<Point>,
    pub rotation: Option<Rotation>,
}

impl ShapeGeometry {
    #[must_use]
    pub fn new(points: Vec<Point>, rotation: Option<Rotation>) -> Self {
        Self { points, rotation }
    }

    /// Every coordinate and the rotation (if any) are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite()) && self.rotation.is_none_or(|r| r.is_finite())
    }

    /// Finite and has at least two points.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.points.len() >= 2 && self.is_finite()
    }
}

/// Current selection: a primary shape plus the full selected set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub primary: Option<ShapeId>,
    pub ids: Vec<ShapeId>,
}

impl Selection {
    /// Selection of a single shape.
    #[must_use]
    pub fn single(id: ShapeId) -> Self {
        Self { primary: Some(id), ids: vec![id] }
    }

    /// Selection of several shapes; duplicates are dropped and the first id is primary.
    #[must_use]
    pub fn many<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ShapeId>,
    {
        let mut seen = HashSet::new();
        let ids: Vec<ShapeId> = ids.into_iter().filter(|id| seen.insert(*id)).collect();
        Self { primary: ids.first().copied(), ids }
    }

    #[must_use]
    pub fn contains(&self, id: &ShapeId) -> bool {
        self.ids.contains(id)
    }

    /// More than one shape is selected.
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.ids.len() > 1
    }
}

/// Store operations consumed by the interaction engine.
pub trait ShapeStore {
    /// Committed record for `id`.
    fn shape(&self, id: &ShapeId) -> Option<&Shape>;

    /// Every committed shape, in a stable order.
    fn shapes(&self) -> Vec<&Shape>;

    /// Show `geometry` for `id` without recording history. Returns false for unknown ids.
    fn update_live(&mut self, id: &ShapeId, geometry: ShapeGeometry) -> bool;

    /// Drop any live geometry for `id`, reverting the view to the committed record.
    fn clear_live(&mut self, id: &ShapeId);

    /// Write every edit as one history entry. Returns false (and writes nothing) if any id is unknown.
    fn commit(&mut self, edits: Vec<(ShapeId, ShapeGeometry)>) -> bool;

    fn selection(&self) -> Selection;

    fn is_locked(&self, id: &ShapeId) -> bool;

    fn layer_visible(&self, layer_id: &LayerId) -> bool;
}

// =============================================================
// DocStore
// =============================================================

/// Before/after geometry of one shape in a history entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEdit {
    pub id: ShapeId,
    pub before: ShapeGeometry,
    pub after: ShapeGeometry,
}

/// One undoable step; a whole interaction session is a single entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub edits: Vec<HistoryEdit>,
}

/// In-memory shape store with a live overlay and bounded undo/redo.
pub struct DocStore {
    shapes: HashMap<ShapeId, Shape>,
    live: HashMap<ShapeId, ShapeGeometry>,
    selection: Selection,
    hidden_layers: HashSet<LayerId>,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    history_limit: usize,
    last_modified: i64,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(HISTORY_LIMIT)
    }

    /// Create an empty store keeping at most `limit` undo entries.
    #[must_use]
    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            shapes: HashMap::new(),
            live: HashMap::new(),
            selection: Selection::default(),
            hidden_layers: HashSet::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            history_limit: limit.max(1),
            last_modified: 0,
        }
    }

    /// Insert or replace a shape. Not recorded in history.
    pub fn insert(&mut self, shape: Shape) {
        self.live.remove(&shape.id);
        self.shapes.insert(shape.id, shape);
    }

    /// Remove a shape by id, returning it if it was present.
    pub fn remove(&mut self, id: &ShapeId) -> Option<Shape> {
        self.live.remove(id);
        self.selection.ids.retain(|s| s != id);
        if self.selection.primary.as_ref() == Some(id) {
            self.selection.primary = self.selection.ids.first().copied();
        }
        self.shapes.remove(id)
    }

    /// Replace all shapes with a snapshot and reset history.
    pub fn load_snapshot(&mut self, shapes: Vec<Shape>) {
        self.shapes.clear();
        self.live.clear();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.selection = Selection::default();
        for shape in shapes {
            self.last_modified = self.last_modified.max(shape.modified);
            self.shapes.insert(shape.id, shape);
        }
    }

    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn set_layer_visible(&mut self, layer_id: LayerId, visible: bool) {
        if visible {
            self.hidden_layers.remove(&layer_id);
        } else {
            self.hidden_layers.insert(layer_id);
        }
    }

    /// Live geometry for `id`, if a session is showing one.
    #[must_use]
    pub fn live(&self, id: &ShapeId) -> Option<&ShapeGeometry> {
        self.live.get(id)
    }

    /// What the renderer should draw for `id`: live geometry if present, else committed.
    #[must_use]
    pub fn displayed(&self, id: &ShapeId) -> Option<ShapeGeometry> {
        if let Some(live) = self.live.get(id) {
            return Some(live.clone());
        }
        self.shapes.get(id).map(Shape::geometry)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.undo_stack.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Revert the most recent entry. Returns the ids it touched.
    pub fn undo(&mut self) -> Vec<ShapeId> {
        let Some(entry) = self.undo_stack.pop() else {
            return Vec::new();
        };
        let ids = self.apply_entry(&entry, |edit| edit.before.clone());
        self.redo_stack.push(entry);
        ids
    }

    /// Re-apply the most recently undone entry. Returns the ids it touched.
    pub fn redo(&mut self) -> Vec<ShapeId> {
        let Some(entry) = self.redo_stack.pop() else {
            return Vec::new();
        };
        let ids = self.apply_entry(&entry, |edit| edit.after.clone());
        self.undo_stack.push(entry);
        ids
    }

    fn apply_entry<F>(&mut self, entry: &HistoryEntry, pick: F) -> Vec<ShapeId>
    where
        F: Fn(&HistoryEdit) -> ShapeGeometry,
    {
        let modified = self.next_modified();
        let mut ids = Vec::with_capacity(entry.edits.len());
        for edit in &entry.edits {
            if let Some(shape) = self.shapes.get_mut(&edit.id) {
                self.live.remove(&edit.id);
                shape.set_geometry(pick(edit));
                shape.modified = modified;
                ids.push(edit.id);
            }
        }
        ids
    }

    fn next_modified(&mut self) -> i64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX));
        self.last_modified = now.max(self.last_modified + 1);
        self.last_modified
    }
}

impl Default for DocStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeStore for DocStore {
    fn shape(&self, id: &ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    fn shapes(&self) -> Vec<&Shape> {
        let mut shapes: Vec<&Shape> = self.shapes.values().collect();
        shapes.sort_by_key(|s| s.id);
        shapes
    }

    fn update_live(&mut self, id: &ShapeId, geometry: ShapeGeometry) -> bool {
        if !self.shapes.contains_key(id) {
            return false;
        }
        self.live.insert(*id, geometry);
        true
    }

    fn clear_live(&mut self, id: &ShapeId) {
        self.live.remove(id);
    }

    fn commit(&mut self, edits: Vec<(ShapeId, ShapeGeometry)>) -> bool {
        if edits.is_empty() || edits.iter().any(|(id, _)| !self.shapes.contains_key(id)) {
            return false;
        }
        let modified = self.next_modified();
        let mut entry = HistoryEntry { edits: Vec::with_capacity(edits.len()) };
        for (id, after) in edits {
            self.live.remove(&id);
            if let Some(shape) = self.shapes.get_mut(&id) {
                let before = shape.geometry();
                shape.set_geometry(after.clone());
                shape.modified = modified;
                entry.edits.push(HistoryEdit { id, before, after });
            }
        }
        self.undo_stack.push(entry);
        if self.undo_stack.len() > self.history_limit {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
        true
    }

    fn selection(&self) -> Selection {
        self.selection.clone()
    }

    fn is_locked(&self, id: &ShapeId) -> bool {
        self.shapes.get(id).is_some_and(|s| s.locked)
    }

    fn layer_visible(&self, layer_id: &LayerId) -> bool {
        !self.hidden_layers.contains(layer_id)
    }
}
