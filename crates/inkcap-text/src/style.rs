//! Caption style: font, color, alignment and the layout constants

/// Fixed leading multiplier. Line height = font size * 1.2.
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Padding added to each side of the derived bounding box, in display pixels.
/// Visual affordance and hit-testing tolerance.
pub const BOX_PADDING: f32 = 10.0;

/// Captions wrap at this fraction of the surface width.
pub const WRAP_WIDTH_FRACTION: f32 = 0.9;

/// Lower clamp for malformed font sizes.
pub const MIN_FONT_SIZE: f32 = 1.0;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Color (RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color (#RGB, #RRGGBB, #RRGGBBAA)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::rgba(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Parse a CSS color value (hex or a small set of named colors)
    ///
    /// Unparseable input degrades to white rather than failing the render.
    pub fn from_css(value: &str) -> Self {
        let value = value.trim();
        if value.starts_with('#') {
            return Self::from_hex(value).unwrap_or(Self::WHITE);
        }
        match value.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "transparent" => Self::rgba(0, 0, 0, 0),
            _ => Self::WHITE,
        }
    }
}

/// Style of one caption. Immutable per render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in display pixels
    pub font_size_px: f32,
    /// Font family name
    pub font_family: String,
    /// Fill color
    pub color: Color,
    /// Horizontal alignment relative to the anchor
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size_px: 48.0,
            font_family: String::from("Inter"),
            color: Color::WHITE,
            align: TextAlign::Center,
        }
    }
}

impl TextStyle {
    /// Font size with the malformed-input clamp applied
    ///
    /// Zero, negative, and non-finite sizes collapse to [`MIN_FONT_SIZE`].
    pub fn clamped_size(&self) -> f32 {
        if self.font_size_px.is_finite() && self.font_size_px >= MIN_FONT_SIZE {
            self.font_size_px
        } else {
            MIN_FONT_SIZE
        }
    }

    /// Line height for this style (before any render scale)
    pub fn line_height(&self) -> f32 {
        self.clamped_size() * LINE_HEIGHT_FACTOR
    }
}
