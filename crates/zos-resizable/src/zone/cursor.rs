//! Cursor feedback

use serde::Serialize;

/// Cursor the host should show over the surface.
///
/// Serializes to the matching CSS `cursor` keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorHint {
    /// Top-right / bottom-left diagonal
    NeswResize,
    /// Top-left / bottom-right diagonal
    NwseResize,
    /// Vertical resize (top or bottom edge)
    RowResize,
    /// Horizontal resize (left or right edge)
    ColResize,
    /// Whole-surface drag
    Move,
    /// Pointer is not over the surface
    Default,
}

impl CursorHint {
    /// CSS cursor keyword
    pub fn css(&self) -> &'static str {
        match self {
            CursorHint::NeswResize => "nesw-resize",
            CursorHint::NwseResize => "nwse-resize",
            CursorHint::RowResize => "row-resize",
            CursorHint::ColResize => "col-resize",
            CursorHint::Move => "move",
            CursorHint::Default => "default",
        }
    }
}
