//! Rendering style and errors.

use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
    #[error("Image buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// How strokes and the background are painted.
#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    /// Stroke color.
    pub ink: Color,
    /// Color the surface is cleared to.
    pub background: Color,
    /// Stroke width in pixels.
    pub line_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            ink: Color::from_rgba8(0, 0, 0, 255),
            background: Color::from_rgba8(255, 255, 255, 255),
            line_width: 1.0,
        }
    }
}

impl RenderStyle {
    /// Set the stroke color.
    pub fn with_ink(mut self, color: Color) -> Self {
        self.ink = color;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the stroke width; non-positive widths fall back to one pixel.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = if width > 0.0 && width.is_finite() { width } else { 1.0 };
        self
    }
}

/// Convert a peniko color to tiny-skia.
pub(crate) fn to_skia(color: Color) -> tiny_skia::Color {
    let c = color.to_rgba8();
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}
