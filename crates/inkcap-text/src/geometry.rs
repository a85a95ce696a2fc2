//! Geometry primitives for caption layout and hit-testing

/// A point in surface coordinates (pixels, y-down)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Replace non-finite coordinates with 0.0
    ///
    /// Malformed anchors must not crash layout; they degrade to the origin.
    pub fn finite_or_zero(self) -> Self {
        Self {
            x: if self.x.is_finite() { self.x } else { 0.0 },
            y: if self.y.is_finite() { self.y } else { 0.0 },
        }
    }

    /// Offset of `self` relative to `origin`
    pub fn offset_from(self, origin: Point) -> Vec2 {
        Vec2 {
            dx: self.x - origin.x,
            dy: self.y - origin.y,
        }
    }

    /// Translate by the inverse of an offset (pointer minus grab offset)
    pub fn minus(self, offset: Vec2) -> Point {
        Point {
            x: self.x - offset.dx,
            y: self.y - offset.dy,
        }
    }

    pub fn scale(self, k: f32) -> Point {
        Point {
            x: self.x * k,
            y: self.y * k,
        }
    }
}

/// A 2D offset
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    pub dx: f32,
    pub dy: f32,
}

/// Rectangle (x, y is the top-left corner)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Inclusive containment test on all four edges
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }

    /// Field-wise comparison with a tolerance
    ///
    /// Used to decide whether a freshly derived box actually moved; boxes
    /// within `epsilon` on every field are treated as unchanged.
    pub fn approx_eq(&self, other: &Rect, epsilon: f32) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.width - other.width).abs() <= epsilon
            && (self.height - other.height).abs() <= epsilon
    }

    /// Scale all four fields by `k`
    pub fn scale(&self, k: f32) -> Rect {
        Rect {
            x: self.x * k,
            y: self.y * k,
            width: self.width * k,
            height: self.height * k,
        }
    }
}

/// Maximum width of the interactive display surface
pub const PREVIEW_MAX_WIDTH: f32 = 800.0;

/// Display canvas vs. natural (export) resolution
///
/// The display surface is a scaled-down view of the natural resolution.
/// Scale factors may differ per axis when the aspect was cropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    pub display_width: f32,
    pub display_height: f32,
    pub natural_width: f32,
    pub natural_height: f32,
}

impl CanvasGeometry {
    pub fn new(display_width: f32, display_height: f32, natural_width: f32, natural_height: f32) -> Self {
        Self {
            display_width,
            display_height,
            natural_width,
            natural_height,
        }
    }

    /// Fit a display canvas of the given aspect ratio inside a container
    ///
    /// Width is clamped to [`PREVIEW_MAX_WIDTH`]; if the derived height does
    /// not fit the container, the canvas is sized from the height instead.
    pub fn fit(
        container_width: f32,
        container_height: f32,
        aspect_ratio: f32,
        natural_width: f32,
        natural_height: f32,
    ) -> Self {
        let mut width = container_width.min(PREVIEW_MAX_WIDTH);
        let mut height = width / aspect_ratio;

        if height > container_height {
            height = container_height;
            width = height * aspect_ratio;
        }

        Self {
            display_width: width,
            display_height: height,
            natural_width,
            natural_height,
        }
    }

    pub fn scale_x(&self) -> f32 {
        self.natural_width / self.display_width
    }

    pub fn scale_y(&self) -> f32 {
        self.natural_height / self.display_height
    }

    /// Uniform scale used for export rendering
    ///
    /// When the axes disagree the smaller factor wins, so scaled text never
    /// overflows the cropped axis.
    pub fn export_scale(&self) -> f32 {
        self.scale_x().min(self.scale_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        // All four corners are inside
        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(110.0, 20.0)));
        assert!(rect.contains(Point::new(10.0, 70.0)));
        assert!(rect.contains(Point::new(110.0, 70.0)));
        // Just outside
        assert!(!rect.contains(Point::new(110.1, 70.0)));
        assert!(!rect.contains(Point::new(9.9, 20.0)));
    }

    #[test]
    fn test_approx_eq() {
        let a = Rect::new(1.0, 2.0, 3.0, 4.0);
        let b = Rect::new(1.005, 2.0, 3.0, 4.0);
        assert!(a.approx_eq(&b, 0.01));
        assert!(!a.approx_eq(&b, 0.001));
    }

    #[test]
    fn test_rect_scale() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0).scale(4.0);
        assert_eq!(rect, Rect::new(40.0, 80.0, 120.0, 160.0));
    }

    #[test]
    fn test_finite_or_zero() {
        let p = Point::new(f32::NAN, f32::INFINITY).finite_or_zero();
        assert_eq!(p, Point::new(0.0, 0.0));
        let q = Point::new(5.0, -3.0).finite_or_zero();
        assert_eq!(q, Point::new(5.0, -3.0));
    }

    #[test]
    fn test_geometry_fit_width_limited() {
        // Square aspect fits the container width (clamped to max)
        let geom = CanvasGeometry::fit(1000.0, 900.0, 1.0, 2000.0, 2000.0);
        assert_eq!(geom.display_width, PREVIEW_MAX_WIDTH);
        assert_eq!(geom.display_height, PREVIEW_MAX_WIDTH);
    }

    #[test]
    fn test_geometry_fit_height_limited() {
        // Tall story aspect gets constrained by the container height
        let geom = CanvasGeometry::fit(600.0, 400.0, 9.0 / 16.0, 900.0, 1600.0);
        assert_eq!(geom.display_height, 400.0);
        assert!((geom.display_width - 400.0 * 9.0 / 16.0).abs() < 0.001);
    }

    #[test]
    fn test_export_scale_uniform() {
        let geom = CanvasGeometry::new(500.0, 500.0, 2000.0, 2000.0);
        assert_eq!(geom.export_scale(), 4.0);
    }

    #[test]
    fn test_export_scale_takes_min_axis() {
        let geom = CanvasGeometry::new(500.0, 500.0, 2000.0, 1500.0);
        assert_eq!(geom.export_scale(), 3.0);
    }
}
