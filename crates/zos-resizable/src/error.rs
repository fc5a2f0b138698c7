//! Error types for zos-resizable
//!
//! Pointer handling never fails; only configuration can be rejected.

use std::fmt;

/// Layout axis named in limit errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Top/bottom limits
    Vertical,
    /// Left/right limits
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => f.write_str("vertical"),
            Axis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Errors raised while building or replacing a [`BoundaryConfig`](crate::BoundaryConfig).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Boundary size is negative or not a finite number.
    #[error("invalid boundary size: {0}")]
    InvalidBoundarySize(f32),

    /// An outer limit is NaN or infinite.
    #[error("outer limit on {side} is not finite")]
    NonFiniteLimit { side: &'static str },

    /// The low limit of an axis lies past its high limit.
    #[error("inverted {axis} limits: {low} > {high}")]
    InvertedLimits { axis: Axis, low: f32, high: f32 },

    /// A string limit other than `"none"`.
    #[error("unknown limit keyword: {0:?}")]
    UnknownLimitKeyword(String),

    /// Configuration text could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
}
