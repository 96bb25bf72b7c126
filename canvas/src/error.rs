//! Error taxonomy for geometry validation and transform resolution.
//!
//! None of these reach the host: the session manager logs them and falls back
//! to the last known-good geometry.

use crate::doc::ShapeId;
use crate::handles::HandleKind;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("shape not found: {0}")]
    UnknownShape(ShapeId),
    #[error("shape {shape_id} has non-finite geometry")]
    NonFiniteGeometry { shape_id: ShapeId },
    #[error("shape {shape_id} has {count} points, need at least 2")]
    TooFewPoints { shape_id: ShapeId, count: usize },
    #[error("no {kind:?} handle at index {index}")]
    HandleOutOfRange { kind: HandleKind, index: usize },
}
