//! tiny-skia backed raster surface.

use crate::image::RgbaImage;
use crate::renderer::{RenderStyle, to_skia};
use sketchpad_core::geometry::CanvasSize;
use sketchpad_core::operation::Stroke as EngineStroke;
use sketchpad_core::surface::{RasterSurface, SurfaceError, SurfaceResult};
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

/// Canvas pixels held in a tiny-skia pixmap.
#[derive(Debug, Clone)]
pub struct PixmapSurface {
    pixmap: Pixmap,
    style: RenderStyle,
}

impl PixmapSurface {
    /// Allocate a surface of `size` cleared to the style's background.
    pub fn with_style(size: CanvasSize, style: RenderStyle) -> SurfaceResult<Self> {
        let pixmap = Pixmap::new(size.width, size.height).ok_or(SurfaceError::InvalidSize {
            width: size.width,
            height: size.height,
        })?;
        let mut surface = Self { pixmap, style };
        surface.clear();
        Ok(surface)
    }

    /// Underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copy the pixels out as straight-alpha RGBA.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let rgba_data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage {
            rgba_data,
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    /// Pixels as `0x00RRGGBB`, composited over the background.
    pub fn to_rgb_u32(&self) -> Vec<u32> {
        self.pixmap
            .pixels()
            .iter()
            .map(|p| {
                let c = p.demultiply();
                (u32::from(c.red()) << 16) | (u32::from(c.green()) << 8) | u32::from(c.blue())
            })
            .collect()
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia(self.style.ink));
        paint.anti_alias = true;
        paint
    }

    fn dot(&mut self, center: kurbo::Point) {
        let radius = self.style.line_width / 2.0;
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius) else {
            return;
        };
        let paint = self.paint();
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    fn skia_stroke(&self, cap: LineCap) -> Stroke {
        Stroke {
            width: self.style.line_width,
            line_cap: cap,
            ..Stroke::default()
        }
    }
}

impl RasterSurface for PixmapSurface {
    type Snapshot = Pixmap;

    fn create(size: CanvasSize) -> SurfaceResult<Self> {
        Self::with_style(size, RenderStyle::default())
    }

    fn with_size(&self, size: CanvasSize) -> SurfaceResult<Self> {
        Self::with_style(size, self.style)
    }

    fn size(&self) -> CanvasSize {
        CanvasSize::new(self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self) {
        self.pixmap.fill(to_skia(self.style.background));
    }

    fn stroke(&mut self, stroke: &EngineStroke) {
        // Zero-length segments draw nothing in tiny-skia; paint the round cap as a dot.
        if let EngineStroke::Segment(line) = stroke {
            if line.p0 == line.p1 {
                self.dot(line.p0);
                return;
            }
        }
        let (path, cap) = match stroke {
            EngineStroke::Rect(rect) => (rect_path(rect), LineCap::Butt),
            // Pen paths are stroked one segment at a time; round caps close the joints.
            EngineStroke::Segment(line) => (segment_path(line), LineCap::Round),
        };
        let Some(path) = path else {
            log::trace!("Skipping degenerate stroke {:?}", stroke);
            return;
        };
        let paint = self.paint();
        let skia_stroke = self.skia_stroke(cap);
        self.pixmap
            .stroke_path(&path, &paint, &skia_stroke, Transform::identity(), None);
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.pixmap.clone()
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        if snapshot.width() == self.pixmap.width() && snapshot.height() == self.pixmap.height() {
            self.pixmap.data_mut().copy_from_slice(snapshot.data());
        } else {
            self.pixmap = snapshot.clone();
        }
    }
}

fn rect_path(rect: &kurbo::Rect) -> Option<Path> {
    let (x0, y0, x1, y1) = (rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32);
    let mut pb = PathBuilder::new();
    pb.move_to(x0, y0);
    pb.line_to(x1, y0);
    pb.line_to(x1, y1);
    pb.line_to(x0, y1);
    pb.close();
    pb.finish()
}

fn segment_path(line: &kurbo::Line) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(line.p0.x as f32, line.p0.y as f32);
    pb.line_to(line.p1.x as f32, line.p1.y as f32);
    pb.finish()
}
