//! Sketchpad Render Library
//!
//! CPU raster surface for the Sketchpad engine, backed by a tiny-skia pixmap,
//! plus RGBA extraction and PNG encoding for export.

mod image;
mod pixmap_surface;
mod renderer;

pub use image::RgbaImage;
pub use pixmap_surface::PixmapSurface;
pub use renderer::{RenderError, RenderResult, RenderStyle};
