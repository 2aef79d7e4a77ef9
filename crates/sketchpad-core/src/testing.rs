//! Test surface that records strokes instead of rasterizing them.

use crate::geometry::CanvasSize;
use crate::operation::Stroke;
use crate::surface::{RasterSurface, SurfaceError, SurfaceResult};

/// Stroke log standing in for pixels. Two recording surfaces with equal
/// `strokes` would rasterize identically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub size: CanvasSize,
    pub strokes: Vec<Stroke>,
    pub clears: usize,
    pub restores: usize,
}

impl RasterSurface for RecordingSurface {
    type Snapshot = Vec<Stroke>;

    fn create(size: CanvasSize) -> SurfaceResult<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(SurfaceError::InvalidSize {
                width: size.width,
                height: size.height,
            });
        }
        Ok(Self {
            size,
            ..Self::default()
        })
    }

    fn size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self) {
        self.strokes.clear();
        self.clears += 1;
    }

    fn stroke(&mut self, stroke: &Stroke) {
        self.strokes.push(*stroke);
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.strokes.clone()
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.strokes = snapshot.clone();
        self.restores += 1;
    }
}
