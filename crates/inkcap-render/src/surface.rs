//! Raster surface
//!
//! Wraps a tiny-skia pixmap with the handful of operations the overlay
//! needs: solid fill, scaled image blit, filled glyph paths, and a dashed
//! rectangle stroke.

use inkcap_text::{Color, Rect};

use crate::image_data::DecodedImage;
use crate::{RenderError, Result};

/// An RGBA drawing surface
pub struct Surface {
    pixmap: tiny_skia::Pixmap,
}

impl Surface {
    /// Create a surface of the given pixel dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .ok_or(RenderError::SurfaceAlloc { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Fill the whole surface with a solid color
    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Draw a decoded image stretched to cover the whole surface
    pub fn draw_image_stretched(&mut self, image: &DecodedImage) {
        let Some(src) = premultiplied_pixmap(image) else {
            return;
        };
        let sx = self.pixmap.width() as f32 / image.width as f32;
        let sy = self.pixmap.height() as f32 / image.height as f32;

        let paint = tiny_skia::PixmapPaint {
            opacity: 1.0,
            blend_mode: tiny_skia::BlendMode::SourceOver,
            quality: tiny_skia::FilterQuality::Bilinear,
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            src.as_ref(),
            &paint,
            tiny_skia::Transform::from_scale(sx, sy),
            None,
        );
    }

    /// Fill a path translated to (x, y)
    pub fn fill_path_at(&mut self, path: &tiny_skia::Path, x: f32, y: f32, color: Color) {
        let mut paint = tiny_skia::Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = true;

        self.pixmap.fill_path(
            path,
            &paint,
            tiny_skia::FillRule::Winding,
            tiny_skia::Transform::from_translate(x, y),
            None,
        );
    }

    /// Stroke a dashed rectangle
    pub fn stroke_dashed_rect(
        &mut self,
        rect: Rect,
        color: Color,
        line_width: f32,
        dash_on: f32,
        dash_off: f32,
    ) {
        let Some(skia_rect) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
        else {
            return;
        };
        let path = tiny_skia::PathBuilder::from_rect(skia_rect);

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = true;

        let stroke = tiny_skia::Stroke {
            width: line_width,
            dash: tiny_skia::StrokeDash::new(vec![dash_on, dash_off], 0.0),
            ..tiny_skia::Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, tiny_skia::Transform::identity(), None);
    }

    /// Read one pixel back as straight-alpha RGBA
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.pixmap.width() || y >= self.pixmap.height() {
            return None;
        }
        let idx = (y * self.pixmap.width() + x) as usize;
        let p = self.pixmap.pixels()[idx].demultiply();
        Some([p.red(), p.green(), p.blue(), p.alpha()])
    }

    /// Straight-alpha RGBA copy of the whole surface
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.pixels().len() * 4);
        for p in self.pixmap.pixels() {
            let c = p.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

fn to_skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Convert straight-alpha RGBA into a premultiplied pixmap
fn premultiplied_pixmap(image: &DecodedImage) -> Option<tiny_skia::Pixmap> {
    let size = tiny_skia::IntSize::from_wh(image.width, image.height)?;
    let mut data = Vec::with_capacity(image.pixels.len());
    for px in image.pixels.chunks_exact(4) {
        let a = px[3] as u16;
        data.push((px[0] as u16 * a / 255) as u8);
        data.push((px[1] as u16 * a / 255) as u8);
        data.push((px[2] as u16 * a / 255) as u8);
        data.push(px[3]);
    }
    tiny_skia::Pixmap::from_vec(data, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_dimensions() {
        let surface = Surface::new(120, 80).unwrap();
        assert_eq!(surface.width(), 120);
        assert_eq!(surface.height(), 80);
    }

    #[test]
    fn test_zero_surface_is_error() {
        assert!(Surface::new(0, 10).is_err());
    }

    #[test]
    fn test_fill_and_pixel_readback() {
        let mut surface = Surface::new(10, 10).unwrap();
        surface.fill(Color::rgb(0x37, 0x41, 0x51));
        assert_eq!(surface.pixel(5, 5), Some([0x37, 0x41, 0x51, 255]));
        assert_eq!(surface.pixel(10, 5), None);
    }

    #[test]
    fn test_image_stretched_covers_surface() {
        let mut surface = Surface::new(8, 8).unwrap();
        surface.fill(Color::BLACK);
        // 2x2 solid red source
        let image = DecodedImage::from_rgba(vec![255, 0, 0, 255].repeat(4), 2, 2).unwrap();
        surface.draw_image_stretched(&image);
        let px = surface.pixel(4, 4).unwrap();
        assert!(px[0] > 200 && px[1] < 50, "expected red, got {px:?}");
        let corner = surface.pixel(0, 0).unwrap();
        assert!(corner[0] > 200, "corner should be covered, got {corner:?}");
    }

    #[test]
    fn test_dashed_stroke_touches_edge() {
        let mut surface = Surface::new(40, 40).unwrap();
        surface.fill(Color::BLACK);
        surface.stroke_dashed_rect(Rect::new(5.0, 5.0, 30.0, 30.0), Color::WHITE, 2.0, 6.0, 4.0);
        // Somewhere on the top edge a dash must have landed
        let hit = (5..35).any(|x| surface.pixel(x, 5).map(|p| p[0] > 100).unwrap_or(false));
        assert!(hit, "expected at least one dash on the top edge");
    }
}
