//! Interaction controller
//!
//! A two-state machine: Idle and Dragging. Dragging begins on pointer-down
//! inside the caption's bounding box, tracks the anchor so the grabbed point
//! stays under the cursor, and ends unconditionally on pointer-up or leave.

use tracing::debug;

use inkcap_text::{Point, Rect, Vec2};

use crate::pointer::{CursorStyle, PointerEvent, PointerEventKind};

/// Ephemeral drag state, alive between pointer-down and pointer-up/leave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position minus anchor at grab time
    pub grab_offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle { hovering: bool },
    Dragging(DragSession),
}

/// What a pointer event changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionUpdate {
    /// New anchor position; the caller must commit it and clear any pending
    /// automatic-placement hint so layout passes don't override the drag.
    pub new_anchor: Option<Point>,
    /// Cursor affordance after this event
    pub cursor: CursorStyle,
}

impl InteractionUpdate {
    fn idle(cursor: CursorStyle) -> Self {
        Self {
            new_anchor: None,
            cursor,
        }
    }
}

/// Pointer-driven caption positioning
#[derive(Debug)]
pub struct InteractionController {
    state: State,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    pub fn new() -> Self {
        Self {
            state: State::Idle { hovering: false },
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(_))
    }

    pub fn is_hovering(&self) -> bool {
        matches!(self.state, State::Idle { hovering: true }) || self.is_dragging()
    }

    /// Feed one pointer event
    ///
    /// `bounding_box` must be the box derived from the latest render pass;
    /// `None` (no caption) makes every event a harmless no-op. `anchor` is
    /// the current committed anchor position.
    pub fn handle(
        &mut self,
        event: PointerEvent,
        bounding_box: Option<Rect>,
        anchor: Point,
    ) -> InteractionUpdate {
        match event.kind {
            PointerEventKind::Down => {
                let inside = bounding_box
                    .map(|b| b.contains(event.position))
                    .unwrap_or(false);
                if inside {
                    let session = DragSession {
                        grab_offset: event.position.offset_from(anchor),
                    };
                    debug!(grab_offset = ?session.grab_offset, "drag started");
                    self.state = State::Dragging(session);
                    InteractionUpdate::idle(CursorStyle::Grabbing)
                } else {
                    self.state = State::Idle { hovering: false };
                    InteractionUpdate::idle(CursorStyle::Auto)
                }
            }

            PointerEventKind::Move => match self.state {
                State::Dragging(session) => InteractionUpdate {
                    new_anchor: Some(event.position.minus(session.grab_offset)),
                    cursor: CursorStyle::Grabbing,
                },
                State::Idle { .. } => {
                    let hovering = bounding_box
                        .map(|b| b.contains(event.position))
                        .unwrap_or(false);
                    self.state = State::Idle { hovering };
                    InteractionUpdate::idle(if hovering {
                        CursorStyle::Grab
                    } else {
                        CursorStyle::Auto
                    })
                }
            },

            PointerEventKind::Up => {
                if self.is_dragging() {
                    debug!("drag ended");
                }
                let hovering = bounding_box
                    .map(|b| b.contains(event.position))
                    .unwrap_or(false);
                self.state = State::Idle { hovering };
                InteractionUpdate::idle(if hovering {
                    CursorStyle::Grab
                } else {
                    CursorStyle::Auto
                })
            }

            PointerEventKind::Leave => {
                self.state = State::Idle { hovering: false };
                InteractionUpdate::idle(CursorStyle::Auto)
            }
        }
    }
}
