//! Background image decoding
//!
//! Generated images arrive as encoded bytes; the overlay works on RGBA.

use crate::{RenderError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Unknown,
}

impl ImageFormat {
    /// Detect format from magic bytes
    pub fn from_bytes(data: &[u8]) -> Self {
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Self::Png;
        }
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Self::Jpeg;
        }
        Self::Unknown
    }
}

/// A decoded image ready for compositing
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// RGBA pixel data, straight alpha
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodedImage {
    /// Decode PNG or JPEG bytes
    pub fn decode(data: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(data)
            .map_err(|e| RenderError::ImageDecode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(Self {
            pixels: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Build from raw RGBA pixels (test images, already-decoded handles)
    pub fn from_rgba(pixels: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self { pixels, width, height })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sniffing() {
        assert_eq!(
            ImageFormat::from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            ImageFormat::Png
        );
        assert_eq!(ImageFormat::from_bytes(&[0xFF, 0xD8, 0xFF, 0xE0]), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_bytes(b"GIF89a"), ImageFormat::Unknown);
        assert_eq!(ImageFormat::from_bytes(&[]), ImageFormat::Unknown);
    }

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(DecodedImage::from_rgba(vec![0u8; 16], 2, 2).is_some());
        assert!(DecodedImage::from_rgba(vec![0u8; 15], 2, 2).is_none());
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = DecodedImage::decode(b"definitely not an image");
        assert!(err.is_err());
    }
}
