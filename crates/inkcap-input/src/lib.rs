//! inkcap-input - Caption Drag Interaction
//!
//! Pointer event model and the two-state (idle/dragging) controller that
//! moves the caption anchor. The controller never owns the bounding box; the
//! caller passes the freshly derived box with every event, so hit-testing a
//! stale box is structurally impossible.

mod controller;
mod pointer;

pub use controller::{DragSession, InteractionController, InteractionUpdate};
pub use pointer::{CursorStyle, PointerEvent, PointerEventKind};
