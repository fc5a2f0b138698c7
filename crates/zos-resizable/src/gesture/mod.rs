//! Gesture handling
//!
//! Provides the resize/drag state machine.

mod controller;
mod state;

pub use controller::GestureController;
pub use state::{Gesture, GestureMode, GesturePhase};
