//! Canvas-space geometry: positions, surface placement and canvas size.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// A canvas-space pixel coordinate (origin top-left).
pub type Position = Point;

/// Default canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 500;
/// Default canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 300;
/// Smallest width a new canvas may be created with.
pub const MIN_CANVAS_WIDTH: u32 = 300;
/// Smallest height a new canvas may be created with.
pub const MIN_CANVAS_HEIGHT: u32 = 200;
/// Largest width a new canvas may be created with.
pub const MAX_CANVAS_WIDTH: u32 = 3840;
/// Largest height a new canvas may be created with.
pub const MAX_CANVAS_HEIGHT: u32 = 2160;

/// Map a raw pointer coordinate into canvas space.
///
/// `origin` is the top-left corner of the raster surface in the same
/// coordinate space as `raw`.
pub fn resolve_position(origin: Point, raw: Point) -> Position {
    raw - origin.to_vec2()
}

/// Placement of the raster surface inside the input coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceOrigin {
    /// Offset of the surface's top-left corner.
    pub offset: Vec2,
}

impl SurfaceOrigin {
    /// Surface placed at the origin of the input space.
    pub const ZERO: Self = Self { offset: Vec2::ZERO };

    pub fn new(x: f64, y: f64) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }

    /// Convert a raw input point to canvas space.
    pub fn resolve(&self, raw: Point) -> Position {
        resolve_position(self.offset.to_point(), raw)
    }

    /// Whether a raw input point falls on the surface.
    pub fn contains(&self, raw: Point, size: CanvasSize) -> bool {
        let p = self.resolve(raw);
        p.x >= 0.0 && p.y >= 0.0 && p.x < size.width as f64 && p.y < size.height as f64
    }
}

/// Pixel dimensions of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size clamped to the range allowed for a new canvas.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.clamp(MIN_CANVAS_WIDTH, MAX_CANVAS_WIDTH),
            height: self.height.clamp(MIN_CANVAS_HEIGHT, MAX_CANVAS_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_subtracts_origin() {
        let p = resolve_position(Point::new(40.0, 10.0), Point::new(50.0, 40.0));
        assert_eq!(p, Point::new(10.0, 30.0));
    }

    #[test]
    fn test_surface_origin_resolve() {
        let origin = SurfaceOrigin::new(48.0, 0.0);
        assert_eq!(origin.resolve(Point::new(100.0, 20.0)), Point::new(52.0, 20.0));
        assert_eq!(SurfaceOrigin::ZERO.resolve(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_contains() {
        let origin = SurfaceOrigin::new(10.0, 10.0);
        let size = CanvasSize::new(100, 50);
        assert!(origin.contains(Point::new(10.0, 10.0), size));
        assert!(origin.contains(Point::new(109.0, 59.0), size));
        assert!(!origin.contains(Point::new(9.0, 20.0), size));
        assert!(!origin.contains(Point::new(110.0, 20.0), size));
        assert!(!origin.contains(Point::new(20.0, 60.0), size));
    }

    #[test]
    fn test_canvas_size_clamped() {
        assert_eq!(CanvasSize::new(100, 100).clamped(), CanvasSize::new(300, 200));
        assert_eq!(CanvasSize::new(640, 480).clamped(), CanvasSize::new(640, 480));
        assert_eq!(CanvasSize::new(10_000, 150).clamped(), CanvasSize::new(3840, 200));
        assert_eq!(CanvasSize::new(5000, 9000).clamped(), CanvasSize::new(3840, 2160));
        assert_eq!(CanvasSize::default(), CanvasSize::new(500, 300));
    }
}
