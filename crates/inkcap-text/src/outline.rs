//! Glyph outlines for rasterization
//!
//! Converts a shaped line of text into a single tiny-skia path. The path is
//! positioned in line-local coordinates: x starts at 0, y grows downward, and
//! the top of the line is y = 0 (the baseline sits one ascent below). The
//! renderer translates the path into place and fills it.

use crate::font::FontStore;

/// Build the outline path for one line of text
///
/// Returns `None` for empty lines, whitespace-only lines, and faces whose
/// glyphs have no outlines; the renderer treats that as nothing to paint.
pub fn outline_line(
    store: &FontStore,
    face_id: fontdb::ID,
    text: &str,
    font_size: f32,
) -> Option<tiny_skia::Path> {
    if text.is_empty() {
        return None;
    }

    store
        .with_face_data(face_id, |data, index| {
            let hb_face = rustybuzz::Face::from_slice(data, index)?;
            let parsed = ttf_parser::Face::parse(data, index).ok()?;

            let upem = parsed.units_per_em() as f32;
            let scale = font_size / upem;
            let baseline = parsed.ascender() as f32 * scale;

            let mut buffer = rustybuzz::UnicodeBuffer::new();
            buffer.push_str(text);
            let shaped = rustybuzz::shape(&hb_face, &[], buffer);

            let mut builder = LinePathBuilder::new(scale, baseline);
            let mut pen_x = 0.0f32;

            for (info, pos) in shaped
                .glyph_infos()
                .iter()
                .zip(shaped.glyph_positions().iter())
            {
                builder.set_pen(
                    pen_x + pos.x_offset as f32 * scale,
                    pos.y_offset as f32 * scale,
                );
                let glyph = ttf_parser::GlyphId(info.glyph_id as u16);
                // Whitespace has no outline; the advance still moves the pen
                let _ = parsed.outline_glyph(glyph, &mut builder);
                pen_x += pos.x_advance as f32 * scale;
            }

            builder.finish()
        })
        .flatten()
}

/// Path builder that converts ttf-parser outlines to a tiny-skia path
///
/// Font units are y-up around the baseline; the canvas is y-down from the
/// line top, so y is flipped around the baseline offset.
struct LinePathBuilder {
    builder: tiny_skia::PathBuilder,
    scale: f32,
    baseline: f32,
    pen_x: f32,
    pen_y: f32,
}

impl LinePathBuilder {
    fn new(scale: f32, baseline: f32) -> Self {
        Self {
            builder: tiny_skia::PathBuilder::new(),
            scale,
            baseline,
            pen_x: 0.0,
            pen_y: 0.0,
        }
    }

    fn set_pen(&mut self, x: f32, y: f32) {
        self.pen_x = x;
        self.pen_y = y;
    }

    fn tx(&self, x: f32) -> f32 {
        self.pen_x + x * self.scale
    }

    fn ty(&self, y: f32) -> f32 {
        self.baseline - (y * self.scale + self.pen_y)
    }

    fn finish(self) -> Option<tiny_skia::Path> {
        self.builder.finish()
    }
}

impl ttf_parser::OutlineBuilder for LinePathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.tx(x), self.ty(y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.tx(x), self.ty(y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.tx(x1), self.ty(y1), self.tx(x), self.ty(y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.tx(x1),
            self.ty(y1),
            self.tx(x2),
            self.ty(y2),
            self.tx(x),
            self.ty(y),
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_empty_line_is_none() {
        let store = FontStore::system();
        let Some(id) = store.query_family("sans-serif") else {
            return;
        };
        assert!(outline_line(&store, id, "", 32.0).is_none());
    }

    #[test]
    fn test_outline_produces_bounded_path() {
        let store = FontStore::system();
        let Some(id) = store.query_family("sans-serif") else {
            return;
        };
        let Some(path) = outline_line(&store, id, "Ag", 32.0) else {
            return; // bitmap-only face
        };
        let bounds = path.bounds();
        assert!(bounds.width() > 0.0, "glyph path should have width");
        // The whole line fits inside roughly one line height
        assert!(bounds.bottom() <= 32.0 * 1.4, "path too tall: {}", bounds.bottom());
    }
}
