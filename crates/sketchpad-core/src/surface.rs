//! Raster surface abstraction.

use crate::geometry::CanvasSize;
use crate::operation::Stroke;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// A mutable pixel buffer the drawing engine paints into.
///
/// The engine never owns pixel storage; it only strokes primitives, clears,
/// and captures/restores exact snapshots for live preview.
pub trait RasterSurface: Sized {
    /// Exact capture of the surface's pixels.
    type Snapshot;

    /// Allocate a cleared surface of the given size.
    fn create(size: CanvasSize) -> SurfaceResult<Self>;

    /// Allocate a cleared surface of `size` configured like this one.
    fn with_size(&self, size: CanvasSize) -> SurfaceResult<Self> {
        Self::create(size)
    }

    /// Surface dimensions.
    fn size(&self) -> CanvasSize;

    /// Reset every pixel to the background.
    fn clear(&mut self);

    /// Stroke a primitive with the surface's ink.
    fn stroke(&mut self, stroke: &Stroke);

    /// Capture the current pixels.
    fn snapshot(&self) -> Self::Snapshot;

    /// Overwrite the pixels with a previous capture.
    fn restore(&mut self, snapshot: &Self::Snapshot);
}
