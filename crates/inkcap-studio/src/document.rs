//! Studio document
//!
//! Plain state: caption text, style, anchor, canvas geometry, background
//! image, pending placement hint, and the derived bounding box. The box is
//! never authoritative; [`crate::Studio`] recomputes it after every mutation
//! that could change text shape.

use inkcap_render::DecodedImage;
use inkcap_text::{CanvasGeometry, Point, Rect, TextStyle};

use crate::placement::PlacementHint;

/// Tolerance for deciding whether the derived box actually changed
pub(crate) const BOX_EPSILON: f32 = 0.01;

/// The editable state of one composition
#[derive(Debug)]
pub struct StudioDocument {
    pub caption: String,
    pub style: TextStyle,
    pub anchor: Point,
    pub geometry: CanvasGeometry,
    /// Placement suggested by analysis, pending until applied or overridden
    pub placement_hint: Option<PlacementHint>,
    pub background: Option<DecodedImage>,
    pub(crate) bounding_box: Option<Rect>,
}

impl StudioDocument {
    pub fn new(geometry: CanvasGeometry) -> Self {
        Self {
            caption: String::new(),
            style: TextStyle::default(),
            anchor: Point::new(100.0, 100.0),
            geometry,
            placement_hint: None,
            background: None,
            bounding_box: None,
        }
    }

    /// The most recently derived bounding box, in display coordinates
    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_no_box() {
        let doc = StudioDocument::new(CanvasGeometry::new(500.0, 500.0, 500.0, 500.0));
        assert!(doc.bounding_box().is_none());
        assert!(doc.caption.is_empty());
        assert_eq!(doc.anchor, Point::new(100.0, 100.0));
    }
}
