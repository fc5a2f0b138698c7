//! Draggable divider line
//!
//! A splitter sits on one side of a layout and slides along a single axis.
//! Left/right splitters are vertical lines moving along x; top/bottom
//! splitters are horizontal lines moving along y. The `limit` is the furthest
//! point the line may travel toward the opposite side.

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::zone::CursorHint;

/// Changes the host should apply to the divider after one event.
///
/// Vertical dividers move through `left`, horizontal ones through `top`, so
/// the record carries the same style keys as [`InteractionUpdate`].
///
/// [`InteractionUpdate`]: crate::InteractionUpdate
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
}

impl SplitterUpdate {
    /// Update placing a divider of the given side at `position`
    fn moved(side: SplitterSide, position: f32) -> Self {
        if side.is_vertical() {
            Self { left: Some(position), ..Default::default() }
        } else {
            Self { top: Some(position), ..Default::default() }
        }
    }

    /// Offset along the divider's axis, if it moved
    #[inline]
    pub fn position(&self) -> Option<f32> {
        self.left.or(self.top)
    }
}

/// Divider configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Layout side the divider belongs to
    pub side: SplitterSide,
    /// Furthest position the divider may reach
    pub limit: f32,
}

/// Layout side a divider belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitterSide {
    Top,
    Right,
    Bottom,
    Left,
}

impl SplitterSide {
    /// Check if the divider is a vertical line (moves along x)
    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, SplitterSide::Left | SplitterSide::Right)
    }

    /// Cursor shown while hovering the divider
    pub fn cursor(&self) -> CursorHint {
        if self.is_vertical() {
            CursorHint::ColResize
        } else {
            CursorHint::RowResize
        }
    }
}

/// One draggable divider
#[derive(Clone, Debug)]
pub struct Splitter {
    config: SplitterConfig,
    position: f32,
    active: bool,
}

impl Splitter {
    /// Create a divider at the given position
    pub fn new(config: SplitterConfig, position: f32) -> Self {
        Self {
            config,
            position,
            active: false,
        }
    }

    /// Current position along the divider's axis
    #[inline]
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Check if the divider is being dragged
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Clamp a candidate position against the limit.
    ///
    /// Left/top dividers never pass the limit going forward; right/bottom
    /// dividers never pass it going back.
    pub fn clamp(&self, pos: f32) -> f32 {
        match self.config.side {
            SplitterSide::Left | SplitterSide::Top => pos.min(self.config.limit),
            SplitterSide::Right | SplitterSide::Bottom => pos.max(self.config.limit),
        }
    }

    /// Pointer entered the divider
    pub fn on_pointer_enter(&self) -> SplitterUpdate {
        SplitterUpdate {
            cursor: Some(self.config.side.cursor()),
            ..Default::default()
        }
    }

    /// Pointer left the divider
    pub fn on_pointer_leave(&self) -> SplitterUpdate {
        SplitterUpdate {
            cursor: Some(CursorHint::Default),
            ..Default::default()
        }
    }

    /// Start dragging the divider
    pub fn on_pointer_down(&mut self) -> SplitterUpdate {
        self.active = true;
        log::debug!("{:?} splitter grabbed at {}", self.config.side, self.position);
        SplitterUpdate {
            capture: Some(true),
            ..Default::default()
        }
    }

    /// Follow the pointer along the divider's axis
    pub fn on_pointer_move(&mut self, pointer: Vec2) -> SplitterUpdate {
        if !self.active {
            return SplitterUpdate::default();
        }
        let raw = if self.config.side.is_vertical() { pointer.x } else { pointer.y };
        if !raw.is_finite() {
            log::warn!("non-finite splitter pointer {}", raw);
            return SplitterUpdate::default();
        }
        let position = self.clamp(raw);
        if position == self.position {
            return SplitterUpdate::default();
        }
        self.position = position;
        SplitterUpdate::moved(self.config.side, position)
    }

    /// Release the divider and report where it ended up
    pub fn on_pointer_up(&mut self) -> SplitterUpdate {
        if !self.active {
            return SplitterUpdate::default();
        }
        self.active = false;
        log::debug!("{:?} splitter released at {}", self.config.side, self.position);
        SplitterUpdate {
            capture: Some(false),
            ..SplitterUpdate::moved(self.config.side, self.position)
        }
    }
}
