//! inkcap-render - Overlay Compositing
//!
//! CPU rendering of the caption overlay: background image (or placeholder),
//! word-wrapped caption with drop shadow, dashed selection outline, and the
//! PNG/JPEG export encoders. The same render call serves the interactive
//! display surface and the full-resolution export surface; only the scale
//! factor differs.

mod export;
mod image_data;
mod overlay;
mod surface;

pub use export::{encode, ExportFormat};
pub use image_data::{DecodedImage, ImageFormat};
pub use overlay::{OverlayRenderer, PLACEHOLDER_FILL, SELECTION_OUTLINE};
pub use surface::Surface;

/// Rendering error types
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Surface allocation failed: {width}x{height}")]
    SurfaceAlloc { width: u32, height: u32 },

    #[error("Failed to decode image: {0}")]
    ImageDecode(String),

    #[error("Failed to encode image: {0}")]
    ImageEncode(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
