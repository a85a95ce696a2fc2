//! Pointer events
//!
//! Minimal unified pointer model: the overlay only cares about position and
//! down/move/up/leave transitions, regardless of mouse, touch, or pen.

use inkcap_text::Point;

/// Pointer event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// Pointer left the surface entirely
    Leave,
}

/// Pointer event in display-surface coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position: Point::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position: Point::new(x, y),
        }
    }

    pub fn leave() -> Self {
        Self {
            kind: PointerEventKind::Leave,
            position: Point::default(),
        }
    }
}

/// Cursor affordance the host should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Auto,
    /// Hovering the caption box
    Grab,
    /// Actively dragging
    Grabbing,
}
