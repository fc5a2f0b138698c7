//! Resize handles: the set of edges a resize gesture moves

use serde::Serialize;
use super::{CursorHint, Edge};

/// Edge or corner grabbed by a resize gesture.
///
/// A handle always names one or two adjacent edges, so an empty or
/// contradictory edge set cannot be represented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeHandle {
    /// Top edge
    Top,
    /// Right edge
    Right,
    /// Bottom edge
    Bottom,
    /// Left edge
    Left,
    /// Top-right corner
    TopRight,
    /// Bottom-right corner
    BottomRight,
    /// Bottom-left corner
    BottomLeft,
    /// Top-left corner
    TopLeft,
}

impl ResizeHandle {
    /// Edges moved by this handle
    pub fn edges(&self) -> &'static [Edge] {
        match self {
            ResizeHandle::Top => &[Edge::Top],
            ResizeHandle::Right => &[Edge::Right],
            ResizeHandle::Bottom => &[Edge::Bottom],
            ResizeHandle::Left => &[Edge::Left],
            ResizeHandle::TopRight => &[Edge::Top, Edge::Right],
            ResizeHandle::BottomRight => &[Edge::Bottom, Edge::Right],
            ResizeHandle::BottomLeft => &[Edge::Bottom, Edge::Left],
            ResizeHandle::TopLeft => &[Edge::Top, Edge::Left],
        }
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandle::TopRight
                | ResizeHandle::BottomRight
                | ResizeHandle::BottomLeft
                | ResizeHandle::TopLeft
        )
    }

    /// Cursor shown while hovering or dragging this handle
    pub fn cursor(&self) -> CursorHint {
        match self {
            ResizeHandle::TopRight | ResizeHandle::BottomLeft => CursorHint::NeswResize,
            ResizeHandle::TopLeft | ResizeHandle::BottomRight => CursorHint::NwseResize,
            ResizeHandle::Top | ResizeHandle::Bottom => CursorHint::RowResize,
            ResizeHandle::Left | ResizeHandle::Right => CursorHint::ColResize,
        }
    }
}
