//! Automatic caption placement
//!
//! Analysis suggests a vertical band; the studio turns it into a concrete
//! anchor for the current canvas and text block, then discards the hint so a
//! later manual drag is never overridden.

use serde::{Deserialize, Serialize};

use inkcap_text::{CanvasGeometry, Point};

/// Suggested vertical placement for the caption
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementHint {
    Top,
    Middle,
    Bottom,
}

/// Anchor for a hint, in display coordinates
///
/// Top sits at 10% of the canvas height, bottom at 90% minus the text block,
/// middle is vertically centered. Horizontally the caption is centered.
/// `text_height` is the unpadded block height (line count x leading).
pub fn placement_anchor(hint: PlacementHint, geometry: &CanvasGeometry, text_height: f32) -> Point {
    let y = match hint {
        PlacementHint::Top => geometry.display_height * 0.1,
        PlacementHint::Bottom => geometry.display_height * 0.9 - text_height,
        PlacementHint::Middle => (geometry.display_height - text_height) / 2.0,
    };
    Point::new(geometry.display_width / 2.0, y)
}
