//! Overlay renderer
//!
//! Draws the background (or placeholder), the wrapped caption with its drop
//! shadow, and the dashed selection outline, then returns the caption's
//! bounding box in the surface's own coordinate space. One code path serves
//! both the display surface and the export surface; everything that has a
//! pixel dimension is multiplied by `scale`.

use tracing::{debug, warn};

use inkcap_text::style::{BOX_PADDING, LINE_HEIGHT_FACTOR, WRAP_WIDTH_FRACTION};
use inkcap_text::{
    outline_line, wrap, Color, FontStore, Point, Rect, ScaledAdvanceMeasurer, ShapedMeasurer,
    TextAlign, TextMeasurer, TextStyle, WrappedText,
};

use crate::image_data::DecodedImage;
use crate::surface::Surface;

/// Flat fill drawn when no background image is present (gray-700)
pub const PLACEHOLDER_FILL: Color = Color { r: 0x37, g: 0x41, b: 0x51, a: 255 };

/// Dashed selection outline color
pub const SELECTION_OUTLINE: Color = Color { r: 167, g: 139, b: 250, a: 230 };

const OUTLINE_WIDTH: f32 = 2.0;
const OUTLINE_DASH_ON: f32 = 6.0;
const OUTLINE_DASH_OFF: f32 = 4.0;

/// Drop shadow constants, in display pixels (scaled at render time)
const SHADOW_COLOR: Color = Color { r: 0, g: 0, b: 0, a: 179 };
const SHADOW_BLUR: f32 = 10.0;
const SHADOW_OFFSET_X: f32 = 2.0;
const SHADOW_OFFSET_Y: f32 = 2.0;

/// Caption overlay renderer
pub struct OverlayRenderer {
    store: FontStore,
    fallback: ScaledAdvanceMeasurer,
}

/// One measured layout pass, shared by drawing and box computation
struct LayoutBlock {
    wrapped: WrappedText,
    line_widths: Vec<f32>,
    rect: Rect,
    font_size: f32,
    anchor: Point,
}

enum Measurer<'a> {
    Shaped(ShapedMeasurer<'a>),
    Fallback(ScaledAdvanceMeasurer),
}

impl TextMeasurer for Measurer<'_> {
    fn measure(&self, text: &str, font_size: f32) -> f32 {
        match self {
            Measurer::Shaped(m) => m.measure(text, font_size),
            Measurer::Fallback(m) => m.measure(text, font_size),
        }
    }
}

impl OverlayRenderer {
    pub fn new(store: FontStore) -> Self {
        Self {
            store,
            fallback: ScaledAdvanceMeasurer::default(),
        }
    }

    /// Renderer backed by the system font database
    pub fn with_system_fonts() -> Self {
        Self::new(FontStore::system())
    }

    pub fn font_store(&self) -> &FontStore {
        &self.store
    }

    pub fn font_store_mut(&mut self) -> &mut FontStore {
        &mut self.store
    }

    fn measurer(&self, family: &str) -> Measurer<'_> {
        match ShapedMeasurer::for_family(&self.store, family) {
            Some(m) => Measurer::Shaped(m),
            None => {
                warn!(family, "no font face resolved; using scaled-advance fallback");
                Measurer::Fallback(self.fallback)
            }
        }
    }

    fn layout_block(
        &self,
        content: &str,
        style: &TextStyle,
        anchor: Point,
        scale: f32,
        surface_width: f32,
    ) -> Option<LayoutBlock> {
        if content.is_empty() {
            return None;
        }

        let font_size = style.clamped_size() * scale;
        let anchor = anchor.finite_or_zero().scale(scale);
        let max_width = surface_width * WRAP_WIDTH_FRACTION;

        let measurer = self.measurer(&style.font_family);
        let wrapped = wrap(content, max_width, |line| measurer.measure(line, font_size));
        let line_widths = wrapped
            .lines
            .iter()
            .map(|line| measurer.measure(line, font_size))
            .collect();
        let rect = wrapped.bounding_box(anchor, style.align, font_size, BOX_PADDING * scale);

        Some(LayoutBlock {
            wrapped,
            line_widths,
            rect,
            font_size,
            anchor,
        })
    }

    /// Derive the caption's bounding box without touching any surface
    ///
    /// Same layout pass as [`OverlayRenderer::render`]; the interactive side
    /// calls this after every state mutation that could change text shape.
    pub fn compute_box(
        &self,
        content: &str,
        style: &TextStyle,
        anchor: Point,
        scale: f32,
        surface_width: f32,
    ) -> Option<Rect> {
        self.layout_block(content, style, anchor, scale, surface_width)
            .map(|block| block.rect)
    }

    /// Composite one frame and return the caption's bounding box
    ///
    /// `scale` maps display coordinates onto this surface: the display pass
    /// uses 1.0, the export pass uses natural/display. The returned box is in
    /// the surface's coordinate space; `None` means there is no caption and
    /// hit-testing should be a no-op.
    pub fn render(
        &self,
        surface: &mut Surface,
        background: Option<&DecodedImage>,
        content: &str,
        style: &TextStyle,
        anchor: Point,
        scale: f32,
        show_selection_outline: bool,
    ) -> Option<Rect> {
        match background {
            Some(image) => {
                surface.fill(PLACEHOLDER_FILL);
                surface.draw_image_stretched(image);
            }
            None => surface.fill(PLACEHOLDER_FILL),
        }

        let block = self.layout_block(content, style, anchor, scale, surface.width() as f32)?;
        debug!(
            lines = block.wrapped.lines.len(),
            box_width = block.rect.width,
            scale,
            "caption layout"
        );

        let line_height = block.font_size * LINE_HEIGHT_FACTOR;
        let face = ShapedMeasurer::for_family(&self.store, &style.font_family).map(|m| m.face_id());

        if let Some(face_id) = face {
            for (i, line) in block.wrapped.lines.iter().enumerate() {
                let Some(path) = outline_line(&self.store, face_id, line, block.font_size) else {
                    continue;
                };
                let x = line_x(block.anchor.x, block.line_widths[i], style.align);
                let y = block.anchor.y + i as f32 * line_height;

                self.draw_shadow(surface, &path, x, y, scale);
                surface.fill_path_at(&path, x, y, style.color);
            }
        }

        if show_selection_outline {
            surface.stroke_dashed_rect(
                block.rect,
                SELECTION_OUTLINE,
                OUTLINE_WIDTH,
                OUTLINE_DASH_ON,
                OUTLINE_DASH_OFF,
            );
        }

        Some(block.rect)
    }

    /// Offset-and-ring approximation of a blurred drop shadow
    ///
    /// Passes spread outward from the base offset at decreasing opacity, one
    /// ring per ~2px of blur.
    fn draw_shadow(&self, surface: &mut Surface, path: &tiny_skia::Path, x: f32, y: f32, scale: f32) {
        let blur = SHADOW_BLUR * scale;
        let base_x = x + SHADOW_OFFSET_X * scale;
        let base_y = y + SHADOW_OFFSET_Y * scale;

        let passes = ((blur / 2.0).ceil() as usize).clamp(1, 8);
        let ring_alpha = (SHADOW_COLOR.a as f32 / (passes as f32 * 2.0)) as u8;

        surface.fill_path_at(
            path,
            base_x,
            base_y,
            Color::rgba(SHADOW_COLOR.r, SHADOW_COLOR.g, SHADOW_COLOR.b, SHADOW_COLOR.a / 2),
        );
        for p in 1..passes {
            let spread = blur * 0.5 * p as f32 / passes as f32;
            for (dx, dy) in [(spread, 0.0), (-spread, 0.0), (0.0, spread), (0.0, -spread)] {
                surface.fill_path_at(
                    path,
                    base_x + dx,
                    base_y + dy,
                    Color::rgba(SHADOW_COLOR.r, SHADOW_COLOR.g, SHADOW_COLOR.b, ring_alpha),
                );
            }
        }
    }
}

fn line_x(anchor_x: f32, line_width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => anchor_x,
        TextAlign::Center => anchor_x - line_width / 2.0,
        TextAlign::Right => anchor_x - line_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer_without_fonts() -> OverlayRenderer {
        OverlayRenderer::new(FontStore::empty())
    }

    fn style() -> TextStyle {
        TextStyle::default()
    }

    #[test]
    fn test_empty_content_returns_no_box() {
        let renderer = renderer_without_fonts();
        let mut surface = Surface::new(100, 100).unwrap();
        let rect = renderer.render(
            &mut surface,
            None,
            "",
            &style(),
            Point::new(50.0, 50.0),
            1.0,
            false,
        );
        assert!(rect.is_none());
    }

    #[test]
    fn test_placeholder_fill_when_no_background() {
        let renderer = renderer_without_fonts();
        let mut surface = Surface::new(64, 64).unwrap();
        renderer.render(&mut surface, None, "", &style(), Point::default(), 1.0, false);
        assert_eq!(surface.pixel(32, 32), Some([0x37, 0x41, 0x51, 255]));
    }

    #[test]
    fn test_background_image_drawn() {
        let renderer = renderer_without_fonts();
        let mut surface = Surface::new(16, 16).unwrap();
        let image = DecodedImage::from_rgba(vec![0, 200, 0, 255].repeat(4), 2, 2).unwrap();
        renderer.render(&mut surface, Some(&image), "", &style(), Point::default(), 1.0, false);
        let px = surface.pixel(8, 8).unwrap();
        assert!(px[1] > 150, "expected green background, got {px:?}");
    }

    #[test]
    fn test_scale_equivalence_of_box() {
        let renderer = renderer_without_fonts();
        let content = "Hello world this is a long caption that should wrap";
        let anchor = Point::new(100.0, 100.0);
        let style = style();

        let one = renderer
            .compute_box(content, &style, anchor, 1.0, 500.0)
            .unwrap();
        let four = renderer
            .compute_box(content, &style, anchor, 4.0, 2000.0)
            .unwrap();

        let scaled = one.scale(4.0);
        assert!(
            four.approx_eq(&scaled, 0.01),
            "expected {scaled:?}, got {four:?}"
        );
    }

    #[test]
    fn test_box_matches_between_compute_and_render() {
        let renderer = renderer_without_fonts();
        let mut surface = Surface::new(500, 500).unwrap();
        let content = "A caption";
        let anchor = Point::new(250.0, 120.0);
        let style = style();

        let computed = renderer.compute_box(content, &style, anchor, 1.0, 500.0);
        let rendered = renderer.render(&mut surface, None, content, &style, anchor, 1.0, false);
        assert_eq!(computed, rendered);
    }

    #[test]
    fn test_non_finite_anchor_degrades_to_origin() {
        let renderer = renderer_without_fonts();
        let style = style();
        let bad = renderer
            .compute_box("text", &style, Point::new(f32::NAN, 10.0), 1.0, 500.0)
            .unwrap();
        let good = renderer
            .compute_box("text", &style, Point::new(0.0, 10.0), 1.0, 500.0)
            .unwrap();
        assert!(bad.approx_eq(&good, 0.001));
    }

    #[test]
    fn test_selection_outline_only_when_requested() {
        let renderer = renderer_without_fonts();
        let style = style();
        let anchor = Point::new(100.0, 100.0);

        let mut plain = Surface::new(200, 200).unwrap();
        let rect = renderer
            .render(&mut plain, None, "outlined", &style, anchor, 1.0, false)
            .unwrap();

        let mut outlined = Surface::new(200, 200).unwrap();
        renderer.render(&mut outlined, None, "outlined", &style, anchor, 1.0, true);

        // Probe along the box's top edge for the outline color
        let y = rect.y.round() as u32;
        let x0 = rect.x.max(0.0).round() as u32;
        let x1 = ((rect.x + rect.width).min(199.0)).round() as u32;
        let hit = (x0..=x1).any(|x| {
            outlined
                .pixel(x, y)
                .map(|p| p[0] > 120 && p[2] > 180)
                .unwrap_or(false)
        });
        assert!(hit, "expected dashed outline on the box edge");

        let plain_hit = (x0..=x1).any(|x| {
            plain
                .pixel(x, y)
                .map(|p| p[0] > 120 && p[2] > 180)
                .unwrap_or(false)
        });
        assert!(!plain_hit, "outline must be absent when not requested");
    }

    #[test]
    fn test_export_scenario_font_and_anchor_scale() {
        // Display 500x500 -> natural 2000x2000 means scale 4: anchor (100,100)
        // draws at (400,400) with font 192. The box encodes both.
        let renderer = renderer_without_fonts();
        let style = TextStyle { font_size_px: 48.0, align: TextAlign::Left, ..TextStyle::default() };
        let anchor = Point::new(100.0, 100.0);

        let display = renderer
            .compute_box("Hi", &style, anchor, 1.0, 500.0)
            .unwrap();
        let export = renderer
            .compute_box("Hi", &style, anchor, 4.0, 2000.0)
            .unwrap();

        // Left-aligned: box x = anchor*scale - padding*scale
        assert!((display.x - (100.0 - 10.0)).abs() < 0.01);
        assert!((export.x - (400.0 - 40.0)).abs() < 0.01);
        // Single line: height = 1.2 * font + 2*padding, all scaled by 4
        assert!((display.height - (57.6 + 20.0)).abs() < 0.01);
        assert!((export.height - 4.0 * (57.6 + 20.0)).abs() < 0.05);
    }
}
