//! Zone classification
//!
//! Decides which edge grab zones the pointer sits in. Stateless: callers
//! re-classify on every idle pointer-move to drive cursor feedback.

mod cursor;
mod handle;

pub use cursor::CursorHint;
pub use handle::ResizeHandle;

use serde::Serialize;

use crate::config::BoundaryConfig;
use crate::math::{Rect, Vec2};

/// One side of the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

/// Result of classifying a pointer against the surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    /// Within the grab zone of one edge or two adjacent edges
    Handle(ResizeHandle),
    /// Inside the surface, away from every enabled edge
    Interior,
    /// Not over the surface
    Outside,
}

impl Zone {
    /// Cursor shown for this zone
    pub fn cursor(&self) -> CursorHint {
        match self {
            Zone::Handle(handle) => handle.cursor(),
            Zone::Interior => CursorHint::Move,
            Zone::Outside => CursorHint::Default,
        }
    }
}

/// Check if the pointer lies in an edge's grab zone.
///
/// The zone is measured inward from the edge line, so a pointer off the
/// surface never matches. Disabled edges never match.
pub fn is_inside(edge: Edge, rect: &Rect, pointer: Vec2, config: &BoundaryConfig) -> bool {
    if !config.is_resizable(edge) || !over_surface(rect, pointer) {
        return false;
    }
    let size = config.boundary_size;
    match edge {
        Edge::Top => pointer.y < rect.top + size,
        Edge::Right => pointer.x > rect.right() - size,
        Edge::Bottom => pointer.y > rect.bottom() - size,
        Edge::Left => pointer.x < rect.left + size,
    }
}

/// Pointer within the surface, edge lines included
#[inline]
fn over_surface(rect: &Rect, pointer: Vec2) -> bool {
    pointer.x >= rect.left && pointer.x <= rect.right() && pointer.y >= rect.top && pointer.y <= rect.bottom()
}

/// Classify the pointer. Corners win over single edges; among corners and
/// among edges the order is top-right, bottom-right, bottom-left, top-left
/// and top, right, bottom, left.
pub fn classify(rect: &Rect, pointer: Vec2, config: &BoundaryConfig) -> Zone {
    let top = is_inside(Edge::Top, rect, pointer, config);
    let right = is_inside(Edge::Right, rect, pointer, config);
    let bottom = is_inside(Edge::Bottom, rect, pointer, config);
    let left = is_inside(Edge::Left, rect, pointer, config);

    let handle = match (top, right, bottom, left) {
        (true, true, _, _) => Some(ResizeHandle::TopRight),
        (_, true, true, _) => Some(ResizeHandle::BottomRight),
        (_, _, true, true) => Some(ResizeHandle::BottomLeft),
        (true, _, _, true) => Some(ResizeHandle::TopLeft),
        (true, _, _, _) => Some(ResizeHandle::Top),
        (_, true, _, _) => Some(ResizeHandle::Right),
        (_, _, true, _) => Some(ResizeHandle::Bottom),
        (_, _, _, true) => Some(ResizeHandle::Left),
        _ => None,
    };

    match handle {
        Some(handle) => Zone::Handle(handle),
        None if rect.contains(pointer) => Zone::Interior,
        None => Zone::Outside,
    }
}
