//! Greedy word-wrap layout
//!
//! Pure layout: given caption text, a maximum width, and a measurement
//! function, produce the wrapped lines and the measured box. Measurement is
//! supplied by the caller since text metrics belong to the drawing side.

use crate::geometry::{Point, Rect};
use crate::style::{LINE_HEIGHT_FACTOR, TextAlign};

/// Result of wrapping one caption
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedText {
    /// Produced lines, paragraph order preserved
    pub lines: Vec<String>,
    /// Widest measured line
    pub box_width: f32,
}

impl WrappedText {
    /// Total text block height (line count x leading), before padding
    pub fn height(&self, font_size: f32) -> f32 {
        self.lines.len() as f32 * font_size * LINE_HEIGHT_FACTOR
    }

    /// Derived bounding box for hit-testing and the selection outline
    ///
    /// The horizontal origin depends on alignment: the anchor is the left
    /// edge, center, or right edge of the text block. `padding` expands the
    /// measured box on every side; callers pass it pre-scaled so the box
    /// scales uniformly with the render scale.
    pub fn bounding_box(&self, anchor: Point, align: TextAlign, font_size: f32, padding: f32) -> Rect {
        let x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - self.box_width / 2.0,
            TextAlign::Right => anchor.x - self.box_width,
        };
        Rect {
            x: x - padding,
            y: anchor.y - padding,
            width: self.box_width + 2.0 * padding,
            height: self.height(font_size) + 2.0 * padding,
        }
    }
}

/// Wrap caption text to `max_width`
///
/// Paragraphs (explicit newlines) wrap independently; an empty paragraph
/// yields one empty line so blank-line spacing survives. Words accumulate
/// greedily; a single word wider than `max_width` is placed alone on its own
/// line and never split mid-word.
pub fn wrap(content: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> WrappedText {
    let mut lines = Vec::new();

    for paragraph in content.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current = String::new();
        for word in paragraph.split(' ') {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if measure(&candidate) > max_width && !current.is_empty() {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            } else {
                current = candidate;
            }
        }
        lines.push(current);
    }

    let mut box_width = 0.0f32;
    for line in &lines {
        box_width = box_width.max(measure(line));
    }

    WrappedText { lines, box_width }
}
