//! Partial geometry produced by one solver step

use serde::Serialize;
use crate::math::Rect;

/// Rectangle fields written by a gesture step.
///
/// `None` means the step leaves that field as it was.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct RectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl RectPatch {
    /// Patch that writes nothing
    pub const EMPTY: RectPatch = RectPatch {
        top: None,
        left: None,
        width: None,
        height: None,
    };

    /// Check if the patch writes nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Combine two patches; fields written by `other` take precedence
    pub fn merge(self, other: RectPatch) -> RectPatch {
        RectPatch {
            top: other.top.or(self.top),
            left: other.left.or(self.left),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    /// Drop any field that is not a finite number
    pub fn finite(self) -> RectPatch {
        let keep = |v: Option<f32>| v.filter(|v| v.is_finite());
        RectPatch {
            top: keep(self.top),
            left: keep(self.left),
            width: keep(self.width),
            height: keep(self.height),
        }
    }

    /// Apply the written fields onto a rectangle
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect {
            top: self.top.unwrap_or(rect.top),
            left: self.left.unwrap_or(rect.left),
            width: self.width.unwrap_or(rect.width),
            height: self.height.unwrap_or(rect.height),
        }
    }

    /// Keep only the fields whose value differs from `rect`
    pub fn changes_from(&self, rect: &Rect) -> RectPatch {
        RectPatch {
            top: self.top.filter(|v| *v != rect.top),
            left: self.left.filter(|v| *v != rect.left),
            width: self.width.filter(|v| *v != rect.width),
            height: self.height.filter(|v| *v != rect.height),
        }
    }
}
