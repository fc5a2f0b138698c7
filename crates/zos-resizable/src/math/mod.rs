//! Core geometry types
//!
//! Pointer positions and surface rectangles share one coordinate space.

mod vec2;
mod rect;

pub use vec2::Vec2;
pub use rect::Rect;
