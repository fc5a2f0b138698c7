//! Pointer event handling

use crate::gesture::{Gesture, GestureMode};
use crate::math::{Rect, Vec2};
use crate::update::InteractionUpdate;
use crate::zone;
use super::InteractionEngine;

impl InteractionEngine {
    /// Handle pointer down.
    ///
    /// Latches a resize when the pointer is in an edge or corner zone and a
    /// drag when it is in the interior. Outside the surface nothing starts.
    pub fn on_pointer_down(&mut self, pointer: Vec2, rect: Rect) -> InteractionUpdate {
        let mut update = match self.gestures.end() {
            Some(stale) => {
                log::warn!("pointer down while {:?} gesture active, pointer up was lost", stale.mode);
                self.finish(stale)
            }
            None => InteractionUpdate::none(),
        };

        if !rect.is_finite() {
            log::warn!("non-finite surface rect {:?}, affected axes are skipped", rect);
        }
        let zone = zone::classify(&rect, pointer, &self.config);
        let mode = match self.gestures.begin(zone, pointer, rect) {
            Some(gesture) => gesture.mode,
            None => return update,
        };

        match mode {
            GestureMode::Resize(handle) => {
                log::debug!("resize started: {:?} at ({}, {})", handle, pointer.x, pointer.y);
                update.resizing = Some(true);
            }
            GestureMode::Drag => {
                log::debug!("drag started at ({}, {})", pointer.x, pointer.y);
                update.dragging = Some(true);
            }
        }
        update.translucent = Some(true);
        update.capture = Some(true);
        update.cursor = self.cursor_change(mode.cursor());
        update
    }

    /// Handle pointer move.
    ///
    /// While idle this only refreshes the cursor. During a gesture it
    /// recomputes geometry from the gesture's start snapshot; `rect` is not
    /// consulted.
    pub fn on_pointer_move(&mut self, pointer: Vec2, rect: Rect) -> InteractionUpdate {
        match self.gestures.update(pointer, &self.config.outer) {
            Some(patch) => {
                if !pointer.is_finite() {
                    log::warn!("non-finite pointer ({}, {}), axis skipped", pointer.x, pointer.y);
                }
                log::trace!("gesture step: {:?}", patch);
                InteractionUpdate::none().with_patch(patch)
            }
            None => {
                let zone = zone::classify(&rect, pointer, &self.config);
                InteractionUpdate {
                    cursor: self.cursor_change(zone.cursor()),
                    ..Default::default()
                }
            }
        }
    }

    /// Handle pointer up.
    ///
    /// Ends the gesture and reports the final position. A no-op while idle.
    pub fn on_pointer_up(&mut self) -> InteractionUpdate {
        match self.gestures.end() {
            Some(gesture) => {
                log::debug!("{:?} gesture ended at {:?}", gesture.mode, gesture.current);
                self.finish(gesture)
            }
            None => InteractionUpdate::none(),
        }
    }

    /// Abandon the gesture and put the surface back where it started
    pub fn on_pointer_cancel(&mut self) -> InteractionUpdate {
        match self.gestures.end() {
            Some(gesture) => {
                log::debug!("{:?} gesture cancelled", gesture.mode);
                let start = gesture.start_rect;
                self.finish(gesture).with_rect(start)
            }
            None => InteractionUpdate::none(),
        }
    }

    /// Flag resets and final position for an ended gesture
    fn finish(&self, gesture: Gesture) -> InteractionUpdate {
        let mut update = InteractionUpdate {
            top: Some(gesture.current.top),
            left: Some(gesture.current.left),
            translucent: Some(false),
            capture: Some(false),
            ..Default::default()
        };
        if gesture.mode.is_resize() {
            update.resizing = Some(false);
        } else {
            update.dragging = Some(false);
        }
        update
    }
}
