//! Gesture state for one pointer-down → pointer-up cycle

use serde::Serialize;

use crate::math::{Rect, Vec2};
use crate::zone::{CursorHint, ResizeHandle};

/// What an active gesture does to the surface.
///
/// A gesture is a resize or a drag, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureMode {
    /// Moving one edge or a corner
    Resize(ResizeHandle),
    /// Moving the whole surface
    Drag,
}

impl GestureMode {
    /// Check if this is a resize
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, GestureMode::Resize(_))
    }

    /// Check if this is a drag
    #[inline]
    pub fn is_drag(&self) -> bool {
        matches!(self, GestureMode::Drag)
    }

    /// Cursor held for the whole gesture
    pub fn cursor(&self) -> CursorHint {
        match self {
            GestureMode::Resize(handle) => handle.cursor(),
            GestureMode::Drag => CursorHint::Move,
        }
    }
}

/// Active gesture, created on pointer-down and dropped on pointer-up
#[derive(Clone, Debug)]
pub struct Gesture {
    /// Resize handle or drag, latched at pointer-down
    pub mode: GestureMode,
    /// Pointer position at pointer-down
    pub anchor: Vec2,
    /// Surface geometry at pointer-down
    pub start_rect: Rect,
    /// Most recent proposed geometry
    pub current: Rect,
}

impl Gesture {
    /// Start a gesture; the anchor is always captured, for drags as well as resizes
    pub fn new(mode: GestureMode, anchor: Vec2, start_rect: Rect) -> Self {
        Self {
            mode,
            anchor,
            start_rect,
            current: start_rect,
        }
    }
}

/// Controller state as seen by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "handle", rename_all = "lowercase")]
pub enum GesturePhase {
    /// No gesture in progress
    Idle,
    /// Resizing with the given handle
    Resizing(ResizeHandle),
    /// Dragging the whole surface
    Dragging,
}

impl GesturePhase {
    /// Check if no gesture is in progress
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, GesturePhase::Idle)
    }

    /// Check if resizing
    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, GesturePhase::Resizing(_))
    }

    /// Check if dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, GesturePhase::Dragging)
    }
}
