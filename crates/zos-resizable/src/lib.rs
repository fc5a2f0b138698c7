//! Resize and Drag Interaction Engine for Zero OS
//!
//! This crate lets a host resize a rectangular surface by its edges and
//! corners, or drag it by its body, optionally kept inside an outer box:
//! - Zone classification and cursor feedback
//! - Resize/drag gesture state machine
//! - Geometry solving with boundary clamping
//! - Draggable divider lines
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Rect`)
//! - [`config`]: Edge toggles, grab zone size and outer limits
//! - [`zone`]: Edge zones, resize handles and cursor hints
//! - [`gesture`]: Gesture state and controller
//! - [`solver`]: Pure geometry recomputation
//! - [`splitter`]: Single-axis divider
//!
//! ## Example
//!
//! ```rust
//! use zos_resizable::{BoundaryConfig, InteractionEngine, OuterBoundary, Rect, Vec2};
//!
//! let config = BoundaryConfig::default().with_outer(OuterBoundary {
//!     right: Some(250.0),
//!     ..OuterBoundary::UNBOUNDED
//! });
//! let mut engine = InteractionEngine::new(config).unwrap();
//! let rect = Rect::new(100.0, 100.0, 200.0, 100.0);
//!
//! engine.on_pointer_down(Vec2::new(298.0, 150.0), rect);
//! let update = engine.on_pointer_move(Vec2::new(400.0, 150.0), rect);
//! assert_eq!(update.width, Some(150.0));
//! engine.on_pointer_up();
//! ```
//!
//! ## Design Principles
//!
//! 1. **No surface access**: every event returns an [`InteractionUpdate`]
//!    diff; the host applies it.
//! 2. **Structural exclusion**: a gesture is a resize or a drag by type.
//! 3. **Never fails on input**: non-finite values skip an axis instead of
//!    corrupting geometry.

pub mod math;
pub mod config;
pub mod zone;
pub mod gesture;
pub mod solver;
pub mod splitter;

mod engine;
mod error;
mod update;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Vec2};
pub use config::{BoundaryConfig, OuterBoundary, DEFAULT_BOUNDARY_SIZE};
pub use zone::{CursorHint, Edge, ResizeHandle, Zone};
pub use gesture::{Gesture, GestureController, GestureMode, GesturePhase};
pub use solver::RectPatch;
pub use splitter::{Splitter, SplitterConfig, SplitterSide, SplitterUpdate};

pub use engine::InteractionEngine;
pub use error::{Axis, ConfigError};
pub use update::InteractionUpdate;
