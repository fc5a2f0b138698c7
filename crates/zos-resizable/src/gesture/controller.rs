//! Gesture controller state machine
//!
//! `Idle → Resizing | Dragging` on pointer-down, back to `Idle` on
//! pointer-up. The mode is latched at pointer-down and never re-classified.

use crate::config::OuterBoundary;
use crate::math::{Rect, Vec2};
use crate::solver::{self, RectPatch};
use crate::zone::Zone;
use super::{Gesture, GestureMode, GesturePhase};

/// Owns the gesture for the lifetime of one managed surface
#[derive(Debug, Default)]
pub struct GestureController {
    /// Current gesture, if any
    gesture: Option<Gesture>,
}

impl GestureController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self { gesture: None }
    }

    /// Get the current phase
    pub fn phase(&self) -> GesturePhase {
        match self.gesture.as_ref().map(|g| g.mode) {
            None => GesturePhase::Idle,
            Some(GestureMode::Resize(handle)) => GesturePhase::Resizing(handle),
            Some(GestureMode::Drag) => GesturePhase::Dragging,
        }
    }

    /// Check if a gesture is in progress
    #[inline]
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start a gesture for the classified zone.
    ///
    /// Edge zones start a resize, the interior starts a drag, and a pointer
    /// outside the surface starts nothing. Any gesture still in progress is
    /// replaced.
    pub fn begin(&mut self, zone: Zone, anchor: Vec2, rect: Rect) -> Option<&Gesture> {
        let mode = match zone {
            Zone::Handle(handle) => GestureMode::Resize(handle),
            Zone::Interior => GestureMode::Drag,
            Zone::Outside => return None,
        };
        self.gesture = Some(Gesture::new(mode, anchor, rect));
        self.gesture.as_ref()
    }

    /// Recompute geometry for the current pointer.
    ///
    /// Returns the fields that changed since the previous step, or `None`
    /// while idle.
    pub fn update(&mut self, pointer: Vec2, outer: &OuterBoundary) -> Option<RectPatch> {
        let gesture = self.gesture.as_mut()?;
        let patch = solver::solve(gesture.mode, gesture.start_rect, gesture.anchor, pointer, outer);
        let changed = patch.changes_from(&gesture.current);
        gesture.current = patch.apply(gesture.current);
        Some(changed)
    }

    /// End the current gesture, returning it
    pub fn end(&mut self) -> Option<Gesture> {
        self.gesture.take()
    }
}
