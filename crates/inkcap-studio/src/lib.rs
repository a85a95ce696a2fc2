//! inkcap-studio - Overlay Studio Composition
//!
//! Ties the layout, rendering, and interaction crates into one studio:
//! - Document state with explicit bounding-box recomputation
//! - Automatic caption placement from analysis hints
//! - Brand preset persistence behind an injected store
//! - Generation-service contract (the remote model is a collaborator,
//!   not part of this core)
//! - Flattened PNG/JPEG export at natural resolution

mod document;
mod export;
mod generation;
mod placement;
mod presets;
mod studio;

pub use document::StudioDocument;
pub use export::ExportFile;
pub use generation::{
    Analysis, AnalysisRequest, ArtStyle, ColorMood, GenerationError, GenerationService, PostFormat,
};
pub use placement::{placement_anchor, PlacementHint};
pub use presets::{BrandPreset, JsonPresetStore, MemoryPresetStore, PresetStore};
pub use studio::Studio;

// Re-export the pieces hosts need to drive the studio
pub use inkcap_input::{CursorStyle, PointerEvent, PointerEventKind};
pub use inkcap_render::{encode, DecodedImage, ExportFormat, OverlayRenderer, Surface};
pub use inkcap_text::{CanvasGeometry, Color, FontStore, Point, Rect, TextAlign, TextStyle};

/// Studio error types
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    #[error(transparent)]
    Render(#[from] inkcap_render::RenderError),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Preset persistence failed: {0}")]
    Presets(String),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, StudioError>;
