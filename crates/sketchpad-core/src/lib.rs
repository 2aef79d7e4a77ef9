//! Sketchpad Core Library
//!
//! Platform-agnostic core of the Sketchpad drawing canvas: the operation
//! model, the drawing engine, the undo/redo history and the gesture state
//! machine. Pixel storage is supplied by the caller through [`RasterSurface`].

pub mod geometry;
pub mod history;
pub mod input;
pub mod operation;
pub mod session;
pub mod surface;
pub mod tools;

#[cfg(test)]
pub(crate) mod testing;

pub use geometry::{CanvasSize, Position, SurfaceOrigin, resolve_position};
pub use history::History;
pub use input::{PointerEvent, PointerTracker};
pub use operation::{Operation, PathOperation, PointKind, PointOperation, Stroke, paint};
pub use session::Session;
pub use surface::{RasterSurface, SurfaceError};
pub use tools::{ToolKind, ToolManager};
