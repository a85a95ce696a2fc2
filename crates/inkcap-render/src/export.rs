//! Export encoding
//!
//! Flattens a rendered surface into PNG (lossless) or JPEG (quality 90).

use std::io::Cursor;

use crate::surface::Surface;
use crate::{RenderError, Result};

const JPEG_QUALITY: u8 = 90;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
        }
    }
}

/// Encode a surface in the chosen format
pub fn encode(surface: &Surface, format: ExportFormat) -> Result<Vec<u8>> {
    let rgba = image::RgbaImage::from_raw(surface.width(), surface.height(), surface.to_rgba())
        .ok_or_else(|| RenderError::ImageEncode("surface buffer size mismatch".into()))?;

    let mut out = Cursor::new(Vec::new());
    match format {
        ExportFormat::Png => {
            image::DynamicImage::ImageRgba8(rgba)
                .write_to(&mut out, image::ImageFormat::Png)
                .map_err(|e| RenderError::ImageEncode(e.to_string()))?;
        }
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = image::DynamicImage::ImageRgba8(rgba).to_rgb8();
            let mut encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
            encoder
                .encode_image(&rgb)
                .map_err(|e| RenderError::ImageEncode(e.to_string()))?;
        }
    }
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_data::ImageFormat;
    use inkcap_text::Color;

    fn filled_surface() -> Surface {
        let mut surface = Surface::new(16, 16).unwrap();
        surface.fill(Color::rgb(10, 80, 160));
        surface
    }

    #[test]
    fn test_png_magic_bytes() {
        let bytes = encode(&filled_surface(), ExportFormat::Png).unwrap();
        assert_eq!(ImageFormat::from_bytes(&bytes), ImageFormat::Png);
    }

    #[test]
    fn test_jpeg_magic_bytes() {
        let bytes = encode(&filled_surface(), ExportFormat::Jpeg).unwrap();
        assert_eq!(ImageFormat::from_bytes(&bytes), ImageFormat::Jpeg);
    }

    #[test]
    fn test_png_round_trips_pixels() {
        let bytes = encode(&filled_surface(), ExportFormat::Png).unwrap();
        let decoded = crate::image_data::DecodedImage::decode(&bytes).unwrap();
        assert_eq!(decoded.width, 16);
        assert_eq!(decoded.height, 16);
        assert_eq!(&decoded.pixels[0..3], &[10, 80, 160]);
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
    }
}
