//! Update record returned from every pointer event

use serde::Serialize;

use crate::math::Rect;
use crate::solver::RectPatch;
use crate::zone::CursorHint;

/// Changes the host should apply to the surface after one event.
///
/// Only fields that changed are present; each field appears at most once per
/// event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resizing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<CursorHint>,
    /// Semi-transparent while a gesture is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translucent: Option<bool>,
    /// Host should route all pointer events to this surface until released
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<bool>,
}

impl InteractionUpdate {
    /// Update that changes nothing
    #[inline]
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if the update changes nothing
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy the written geometry fields from a patch
    pub fn with_patch(mut self, patch: RectPatch) -> Self {
        self.top = patch.top;
        self.left = patch.left;
        self.width = patch.width;
        self.height = patch.height;
        self
    }

    /// Copy every geometry field from a rectangle
    pub fn with_rect(self, rect: Rect) -> Self {
        self.with_patch(RectPatch {
            top: Some(rect.top),
            left: Some(rect.left),
            width: Some(rect.width),
            height: Some(rect.height),
        })
    }

    /// Apply the geometry fields onto a rectangle
    pub fn apply(&self, rect: Rect) -> Rect {
        RectPatch {
            top: self.top,
            left: self.left,
            width: self.width,
            height: self.height,
        }
        .apply(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_serializes_to_empty_object() {
        let update = InteractionUpdate::none();
        assert!(update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
    }

    #[test]
    fn test_update_json_shape() {
        let update = InteractionUpdate {
            left: Some(130.0),
            width: Some(170.0),
            resizing: Some(true),
            cursor: Some(CursorHint::ColResize),
            ..Default::default()
        };
        let value = serde_json::to_value(update).unwrap();
        assert_eq!(value["left"], 130.0);
        assert_eq!(value["width"], 170.0);
        assert_eq!(value["resizing"], true);
        assert_eq!(value["cursor"], "col-resize");
        assert!(value.get("top").is_none());
        assert!(value.get("dragging").is_none());
    }

    #[test]
    fn test_apply_geometry() {
        let update = InteractionUpdate::none().with_patch(RectPatch {
            width: Some(80.0),
            ..RectPatch::EMPTY
        });
        let rect = update.apply(Rect::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(rect, Rect::new(1.0, 2.0, 80.0, 4.0));
    }
}
