//! Exported raster images.

use crate::renderer::{RenderError, RenderResult};

/// Straight-alpha RGBA pixels read back from a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// RGBA pixel data (4 bytes per pixel).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl RgbaImage {
    /// Encode as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        let expected = self.width as usize * self.height as usize * 4;
        if self.rgba_data.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: self.rgba_data.len(),
            });
        }

        let mut png_data = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut png_data, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.rgba_data)?;
            writer.finish()?;
        }
        log::debug!("Encoded {}x{} PNG ({} bytes)", self.width, self.height, png_data.len());
        Ok(png_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixmapSurface;
    use sketchpad_core::geometry::CanvasSize;
    use sketchpad_core::surface::RasterSurface;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_header() {
        let surface = PixmapSurface::create(CanvasSize::new(5, 3)).unwrap();
        let image = surface.to_rgba_image();
        assert_eq!(image.rgba_data.len(), 5 * 3 * 4);

        let png_data = image.encode_png().unwrap();
        assert_eq!(&png_data[..8], &PNG_SIGNATURE);
        // IHDR width/height, big-endian.
        assert_eq!(&png_data[16..20], &5u32.to_be_bytes());
        assert_eq!(&png_data[20..24], &3u32.to_be_bytes());
    }

    #[test]
    fn test_decoded_png_matches_pixels() {
        let surface = PixmapSurface::create(CanvasSize::new(4, 4)).unwrap();
        let image = surface.to_rgba_image();
        let png_data = image.encode_png().unwrap();

        let decoder = png::Decoder::new(png_data.as_slice());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        assert_eq!((info.width, info.height), (4, 4));
        assert_eq!(&buf[..info.buffer_size()], &image.rgba_data[..]);
    }

    #[test]
    fn test_mismatched_buffer_is_rejected() {
        let image = RgbaImage {
            rgba_data: vec![0; 7],
            width: 2,
            height: 2,
        };
        assert!(matches!(
            image.encode_png(),
            Err(RenderError::BufferSize { expected: 16, actual: 7 })
        ));
    }
}
