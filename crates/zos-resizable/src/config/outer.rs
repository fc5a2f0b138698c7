//! Outer bounding box limits

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Axis, ConfigError};

/// Per-side limits the surface may never cross while dragged or resized.
///
/// `None` means unbounded on that side. Zero is a real coordinate, not a
/// sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OuterBoundary {
    #[serde(
        rename = "topOuterBoundary",
        default,
        deserialize_with = "deserialize_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub top: Option<f32>,
    #[serde(
        rename = "rightOuterBoundary",
        default,
        deserialize_with = "deserialize_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub right: Option<f32>,
    #[serde(
        rename = "bottomOuterBoundary",
        default,
        deserialize_with = "deserialize_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom: Option<f32>,
    #[serde(
        rename = "leftOuterBoundary",
        default,
        deserialize_with = "deserialize_limit",
        skip_serializing_if = "Option::is_none"
    )]
    pub left: Option<f32>,
}

impl OuterBoundary {
    /// No limits on any side
    pub const UNBOUNDED: OuterBoundary = OuterBoundary {
        top: None,
        right: None,
        bottom: None,
        left: None,
    };

    /// Check if any side is limited
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.top.is_some() || self.right.is_some() || self.bottom.is_some() || self.left.is_some()
    }

    /// Reject non-finite or inverted limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sides = [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ];
        for (side, limit) in sides {
            if limit.is_some_and(|v| !v.is_finite()) {
                return Err(ConfigError::NonFiniteLimit { side });
            }
        }

        if let (Some(low), Some(high)) = (self.top, self.bottom) {
            if low > high {
                return Err(ConfigError::InvertedLimits { axis: Axis::Vertical, low, high });
            }
        }
        if let (Some(low), Some(high)) = (self.left, self.right) {
            if low > high {
                return Err(ConfigError::InvertedLimits { axis: Axis::Horizontal, low, high });
            }
        }
        Ok(())
    }
}

/// Accepts a number, `null`, or the keyword `"none"`.
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLimit {
        Value(f32),
        Keyword(String),
    }

    match Option::<RawLimit>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawLimit::Value(v)) => Ok(Some(v)),
        Some(RawLimit::Keyword(k)) if k.eq_ignore_ascii_case("none") => Ok(None),
        Some(RawLimit::Keyword(k)) => Err(D::Error::custom(ConfigError::UnknownLimitKeyword(k))),
    }
}
