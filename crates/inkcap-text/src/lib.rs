//! inkcap-text - Caption Measurement & Layout
//!
//! This crate provides the text side of the inkcap overlay studio:
//! - Geometry primitives (points, rects, canvas geometry)
//! - Caption style (font size, family, color, alignment)
//! - Greedy word-wrap layout with caller-supplied measurement
//! - Font loading and matching (fontdb)
//! - Advance measurement via shaping (rustybuzz)
//! - Glyph outline extraction for rasterization (ttf-parser → tiny-skia)

pub mod font;
pub mod geometry;
pub mod measure;
pub mod outline;
pub mod style;
pub mod wrap;

pub use font::FontStore;
pub use geometry::{CanvasGeometry, Point, Rect, Vec2};
pub use measure::{FixedAdvanceMeasurer, ScaledAdvanceMeasurer, ShapedMeasurer, TextMeasurer};
pub use outline::outline_line;
pub use style::{Color, TextAlign, TextStyle};
pub use wrap::{wrap, WrappedText};

/// Text layout error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Font not found: {0}")]
    FontNotFound(String),

    #[error("Failed to parse font: {0}")]
    FontParsing(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
