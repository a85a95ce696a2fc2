//! Text measurement
//!
//! The wrap algorithm takes a plain measure closure; these types provide the
//! closures. `ShapedMeasurer` measures real fonts by shaping with rustybuzz;
//! the fixed/scaled variants are deterministic fallbacks.

use crate::font::FontStore;

/// Measures the advance width of a line of text
pub trait TextMeasurer {
    /// Width in pixels of `text` at `font_size`
    fn measure(&self, text: &str, font_size: f32) -> f32;
}

/// Shaping-based measurement over a [`FontStore`] face
///
/// Advances are linear in font size (advance units x size / upem), which is
/// what makes a box rendered at scale k equal the scale-1 box times k.
pub struct ShapedMeasurer<'a> {
    store: &'a FontStore,
    face: fontdb::ID,
}

impl<'a> ShapedMeasurer<'a> {
    /// Resolve a measurer for the family; `None` when no face exists
    pub fn for_family(store: &'a FontStore, family: &str) -> Option<Self> {
        let face = store.query_family(family)?;
        Some(Self { store, face })
    }

    pub fn face_id(&self) -> fontdb::ID {
        self.face
    }
}

impl TextMeasurer for ShapedMeasurer<'_> {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.store
            .with_face_data(self.face, |data, index| {
                let face = rustybuzz::Face::from_slice(data, index)?;
                let upem = face.units_per_em() as f32;

                let mut buffer = rustybuzz::UnicodeBuffer::new();
                buffer.push_str(text);
                let shaped = rustybuzz::shape(&face, &[], buffer);

                let units: i32 = shaped.glyph_positions().iter().map(|p| p.x_advance).sum();
                Some(units as f32 * font_size / upem)
            })
            .flatten()
            .unwrap_or(0.0)
    }
}

/// Fixed advance per character, independent of font size
///
/// The monospace-equivalent measurer used in layout tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    pub advance_px: f32,
}

impl TextMeasurer for FixedAdvanceMeasurer {
    fn measure(&self, text: &str, _font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_px
    }
}

/// Advance proportional to font size
///
/// Renderer fallback when no font face resolves: layout stays deterministic
/// and scales correctly even without any font on the machine.
#[derive(Debug, Clone, Copy)]
pub struct ScaledAdvanceMeasurer {
    /// Fraction of the font size per character
    pub factor: f32,
}

impl Default for ScaledAdvanceMeasurer {
    fn default() -> Self {
        Self { factor: 0.6 }
    }
}

impl TextMeasurer for ScaledAdvanceMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.factor * font_size
    }
}
