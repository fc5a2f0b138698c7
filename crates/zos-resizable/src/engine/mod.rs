//! Interaction engine coordinating classification, gestures and geometry
//!
//! This module is split into focused submodules:
//! - `pointer`: Pointer event handling

mod pointer;

use crate::config::BoundaryConfig;
use crate::error::ConfigError;
use crate::gesture::{GestureController, GesturePhase};
use crate::math::Rect;
use crate::update::InteractionUpdate;
use crate::zone::CursorHint;

/// Interaction engine for one managed surface
///
/// Receives the surface geometry and pointer events and answers with
/// [`InteractionUpdate`]s. It never owns the surface; the host applies each
/// update. Engines for different surfaces share nothing.
#[derive(Debug)]
pub struct InteractionEngine {
    /// Edge toggles, grab zone size and outer limits
    config: BoundaryConfig,
    /// Resize/drag state machine
    pub(crate) gestures: GestureController,
    /// Last cursor reported to the host
    pub(crate) cursor: Option<CursorHint>,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self {
            config: BoundaryConfig::default(),
            gestures: GestureController::new(),
            cursor: None,
        }
    }
}

impl InteractionEngine {
    /// Create an engine with a validated configuration
    pub fn new(config: BoundaryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::debug!("engine created, outer boundary limited: {}", config.outer.is_bounded());
        Ok(Self {
            config,
            ..Default::default()
        })
    }

    /// Get the active configuration
    #[inline]
    pub fn config(&self) -> &BoundaryConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A gesture in progress keeps its latched mode; new limits apply from
    /// the next pointer-move.
    pub fn set_config(&mut self, config: BoundaryConfig) -> Result<(), ConfigError> {
        config.validate()?;
        log::debug!("config replaced, outer boundary limited: {}", config.outer.is_bounded());
        self.config = config;
        Ok(())
    }

    /// Get the current gesture phase
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.gestures.phase()
    }

    /// Report the surface's initial size to the host
    pub fn attach(&mut self, rect: Rect) -> InteractionUpdate {
        self.cursor = Some(CursorHint::Default);
        InteractionUpdate {
            width: rect.width.is_finite().then_some(rect.width),
            height: rect.height.is_finite().then_some(rect.height),
            cursor: self.cursor,
            ..Default::default()
        }
    }

    /// Record a cursor and return it only if it differs from the last one reported
    pub(crate) fn cursor_change(&mut self, cursor: CursorHint) -> Option<CursorHint> {
        if self.cursor == Some(cursor) {
            return None;
        }
        self.cursor = Some(cursor);
        Some(cursor)
    }
}
