//! Shape transform and interactive manipulation engine for land-parcel outlines.
//!
//! Parcels (rectangles, circles/ellipses, polygons, polylines) lie on the
//! ground plane of a 3D viewport. This crate converts pointer input into
//! ground-plane coordinates, computes resize/rotate handles per shape type,
//! resolves each pointer-move into new geometry, and runs the live-preview vs.
//! commit protocol so that one interaction writes one undo entry. Rendering
//! stays with the host: it calls the pure handle/outline functions each frame
//! and acts on the [`engine::Action`]s the engine returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction session manager, [`engine::EngineCore`] |
//! | [`input`] | Modifiers, pointer ids, and the session state machine |
//! | [`doc`] | Shape records, the [`doc::ShapeStore`] seam, in-memory store with history |
//! | [`camera`] | Perspective camera and screen/ground-plane projection |
//! | [`geom`] | Rotation, angles, bounds, ellipse and polygon helpers |
//! | [`handles`] | Handle generation and render outlines |
//! | [`resolve`] | Rotate, resize, drag and flip resolvers with minimum-size enforcement |
//! | [`hit`] | Screen-space handle hit-testing and cursors |
//! | [`snap`] | Magnetic snapping to other shapes' key points |
//! | [`measure`] | Area and dimension labels |
//! | [`config`] | Engine tunables |
//! | [`error`] | Geometry and resolver errors |
//! | [`consts`] | Shared numeric defaults |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod handles;
pub mod hit;
pub mod input;
pub mod measure;
pub mod resolve;
pub mod snap;
