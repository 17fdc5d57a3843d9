//! Core-Domänentypen: Formen, Formen-Tabelle, Snap-Engine, Kamera, Zeichen-Primitive.

pub mod camera;
pub mod draw;
pub mod geometry;
/// Platzierbare Polygon-Formen
///
/// - Shape: Original-Eckpunkte, akkumulierte Transformation, lazy Welt-Geometrie
/// - ShapeError: Fehler bei ungültigen Polygonen
pub mod shape;
pub mod shape_kind;
pub mod snap;

pub use camera::Camera2D;
pub use draw::{DrawCommand, DrawList, DrawTarget};
pub use shape::{Shape, ShapeError};
pub use shape_kind::ShapeKind;
pub use snap::{
    apply_snap, best_snap, find_closest_snap_points, nearest_shape, select_best_pair, SnapPair,
    SnapState,
};
