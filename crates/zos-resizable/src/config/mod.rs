//! Boundary configuration for a managed surface
//!
//! Keys follow the host-facing names (`resizableOnTop`, `boundarySize`,
//! `topOuterBoundary`, ...) so a config object can be passed straight through.

mod outer;

pub use outer::OuterBoundary;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::zone::Edge;

/// Default width of the grab zone along each edge, in pixels
pub const DEFAULT_BOUNDARY_SIZE: f32 = 8.0;

/// Which edges are resizable, how wide their grab zones are, and the outer box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoundaryConfig {
    pub resizable_on_top: bool,
    pub resizable_on_right: bool,
    pub resizable_on_bottom: bool,
    pub resizable_on_left: bool,
    /// Distance from an edge, measured inward, that still grabs the edge
    pub boundary_size: f32,
    #[serde(flatten)]
    pub outer: OuterBoundary,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            resizable_on_top: true,
            resizable_on_right: true,
            resizable_on_bottom: true,
            resizable_on_left: true,
            boundary_size: DEFAULT_BOUNDARY_SIZE,
            outer: OuterBoundary::UNBOUNDED,
        }
    }
}

impl BoundaryConfig {
    /// Check if an edge can be grabbed
    #[inline]
    pub fn is_resizable(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.resizable_on_top,
            Edge::Right => self.resizable_on_right,
            Edge::Bottom => self.resizable_on_bottom,
            Edge::Left => self.resizable_on_left,
        }
    }

    /// Builder-style outer boundary override
    pub fn with_outer(mut self, outer: OuterBoundary) -> Self {
        self.outer = outer;
        self
    }

    /// Validate boundary size and outer limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.boundary_size.is_finite() || self.boundary_size < 0.0 {
            return Err(ConfigError::InvalidBoundarySize(self.boundary_size));
        }
        self.outer.validate()
    }
}
