//! Geometry solver
//!
//! Pure functions from a gesture's start snapshot and the current pointer to
//! the rectangle fields that gesture writes. Nothing here rounds or touches a
//! rendering surface.

mod patch;

pub use patch::RectPatch;

use crate::config::OuterBoundary;
use crate::gesture::GestureMode;
use crate::math::{Rect, Vec2};
use crate::zone::{Edge, ResizeHandle};

/// Solve one step of a gesture
pub fn solve(mode: GestureMode, start: Rect, anchor: Vec2, pointer: Vec2, outer: &OuterBoundary) -> RectPatch {
    match mode {
        GestureMode::Resize(handle) => resize(handle, start, anchor, pointer, outer),
        GestureMode::Drag => drag(start, anchor, pointer, outer),
    }
}

/// Resize by moving the handle's edges.
///
/// Corner handles merge two independent edge computations.
pub fn resize(handle: ResizeHandle, start: Rect, anchor: Vec2, pointer: Vec2, outer: &OuterBoundary) -> RectPatch {
    let delta = pointer - anchor;

    handle
        .edges()
        .iter()
        .fold(RectPatch::EMPTY, |patch, edge| {
            let step = match edge {
                Edge::Top => resize_top(start, delta.y, outer.top),
                Edge::Right => resize_right(start, delta.x, outer.right),
                Edge::Bottom => resize_bottom(start, delta.y, outer.bottom),
                Edge::Left => resize_left(start, delta.x, outer.left),
            };
            patch.merge(step)
        })
        .finite()
}

/// Translate the whole rectangle, clamped into the configured limits.
///
/// When the rectangle is larger than the box on an axis, the top/left limit
/// wins.
pub fn drag(start: Rect, anchor: Vec2, pointer: Vec2, outer: &OuterBoundary) -> RectPatch {
    let delta = pointer - anchor;

    let mut left = start.left + delta.x;
    if let Some(limit) = outer.right {
        left = left.min(limit - start.width);
    }
    if let Some(limit) = outer.left {
        left = left.max(limit);
    }

    let mut top = start.top + delta.y;
    if let Some(limit) = outer.bottom {
        top = top.min(limit - start.height);
    }
    if let Some(limit) = outer.top {
        top = top.max(limit);
    }

    // f32::min/max swallow NaN, so test the inputs rather than the result
    RectPatch {
        left: horizontal_is_finite(start, delta.x).then_some(left),
        top: vertical_is_finite(start, delta.y).then_some(top),
        ..RectPatch::EMPTY
    }
    .finite()
}

#[inline]
fn vertical_is_finite(start: Rect, dy: f32) -> bool {
    dy.is_finite() && start.top.is_finite() && start.height.is_finite()
}

#[inline]
fn horizontal_is_finite(start: Rect, dx: f32) -> bool {
    dx.is_finite() && start.left.is_finite() && start.width.is_finite()
}

fn resize_top(start: Rect, dy: f32, limit: Option<f32>) -> RectPatch {
    if !vertical_is_finite(start, dy) {
        return RectPatch::EMPTY;
    }
    let bottom = start.bottom();
    let mut top = start.top + dy;
    let mut height = start.height - dy;
    if let Some(limit) = limit {
        if top < limit {
            top = limit;
            height = bottom - limit;
        }
    }
    // past the bottom edge the top stays where it was
    RectPatch {
        top: (height >= 0.0).then_some(top),
        height: Some(height.max(0.0)),
        ..RectPatch::EMPTY
    }
}

fn resize_bottom(start: Rect, dy: f32, limit: Option<f32>) -> RectPatch {
    if !vertical_is_finite(start, dy) {
        return RectPatch::EMPTY;
    }
    let mut height = (start.height + dy).max(0.0);
    if let Some(limit) = limit {
        if start.top + height > limit {
            height = (limit - start.top).max(0.0);
        }
    }
    RectPatch {
        height: Some(height),
        ..RectPatch::EMPTY
    }
}

fn resize_left(start: Rect, dx: f32, limit: Option<f32>) -> RectPatch {
    if !horizontal_is_finite(start, dx) {
        return RectPatch::EMPTY;
    }
    let right = start.right();
    let mut left = start.left + dx;
    let mut width = start.width - dx;
    if let Some(limit) = limit {
        if left < limit {
            left = limit;
            width = right - limit;
        }
    }
    RectPatch {
        left: (width >= 0.0).then_some(left),
        width: Some(width.max(0.0)),
        ..RectPatch::EMPTY
    }
}

fn resize_right(start: Rect, dx: f32, limit: Option<f32>) -> RectPatch {
    if !horizontal_is_finite(start, dx) {
        return RectPatch::EMPTY;
    }
    let mut width = (start.width + dx).max(0.0);
    if let Some(limit) = limit {
        if start.left + width > limit {
            width = (limit - start.left).max(0.0);
        }
    }
    RectPatch {
        width: Some(width),
        ..RectPatch::EMPTY
    }
}
