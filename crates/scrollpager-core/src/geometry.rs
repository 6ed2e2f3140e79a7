//! Plain geometry values and the per-axis geometry reader.
//!
//! All positions live in the container's scroll-offset space: the content
//! origin is 0 and the visible region starts at the current scroll offset.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::container::ContainerSnapshot;

/// Scroll dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Parse "x" / "y" (case-insensitive)
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default, deserialize_with = "deserialize_length")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => finite_or_zero(self.x),
            Axis::Y => finite_or_zero(self.y),
        }
    }

    /// Copy of this point with one axis replaced
    pub fn with(&self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self::new(value, self.y),
            Axis::Y => Self::new(self.x, value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    #[serde(default, deserialize_with = "deserialize_length")]
    pub width: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => finite_or_zero(self.width),
            Axis::Y => finite_or_zero(self.height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    #[serde(default, deserialize_with = "deserialize_length")]
    pub x: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub y: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub width: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub height: f64,
}

impl Rect {
    pub fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Leading edge along an axis
    pub fn start(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => finite_or_zero(self.x),
            Axis::Y => finite_or_zero(self.y),
        }
    }

    /// Trailing edge along an axis
    pub fn end(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis)
    }

    pub fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => finite_or_zero(self.width),
            Axis::Y => finite_or_zero(self.height),
        }
    }

    pub fn center(&self, axis: Axis) -> f64 {
        self.start(axis) + self.extent(axis) / 2.0
    }
}

/// Scroll padding on each physical side
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default, deserialize_with = "deserialize_length")]
    pub top: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub right: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub bottom: f64,
    #[serde(default, deserialize_with = "deserialize_length")]
    pub left: f64,
}

impl Padding {
    /// (start, end) padding along an axis: left/right on X, top/bottom on Y
    pub fn along(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (finite_or_zero(self.left), finite_or_zero(self.right)),
            Axis::Y => (finite_or_zero(self.top), finite_or_zero(self.bottom)),
        }
    }
}

/// Current offset, viewport extent and total scrollable extent along one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisGeometry {
    pub offset: f64,
    pub viewport: f64,
    pub total: f64,
}

impl AxisGeometry {
    /// Largest reachable scroll offset
    pub fn max_offset(&self) -> f64 {
        (self.total - self.viewport).max(0.0)
    }

    /// One page is one viewport
    #[inline]
    pub fn page(&self) -> f64 {
        self.viewport
    }
}

/// Read the scroll geometry of a container along `axis`
pub fn read_geometry(container: &ContainerSnapshot, axis: Axis) -> AxisGeometry {
    AxisGeometry {
        offset: container.scroll.along(axis),
        viewport: container.viewport.along(axis),
        total: container.content.along(axis),
    }
}

/// Parse the leading number of a CSS length such as `"12.5px"`.
///
/// Anything without a numeric prefix (`"auto"`, `""`) reads as zero.
pub fn parse_length(value: &str) -> f64 {
    let value = value.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    for (i, c) in value.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '+' | '-' if seen_exp && value[..i].ends_with(['e', 'E']) => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot && !seen_exp => seen_dot = true,
            'e' | 'E' if seen_digit && !seen_exp => seen_exp = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    // Back off a dangling exponent or sign ("3e", "3e-")
    let mut number = &value[..end];
    while number.ends_with(['e', 'E', '+', '-']) {
        number = &number[..number.len() - 1];
    }

    number.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Geometry value as it may appear in a snapshot file
#[derive(Deserialize)]
#[serde(untagged)]
enum LengthValue {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

/// Accept a number or a CSS length string; anything else reads as zero
pub(crate) fn deserialize_length<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LengthValue::deserialize(deserializer)? {
        LengthValue::Number(value) => finite_or_zero(value),
        LengthValue::Text(value) => parse_length(&value),
        LengthValue::Other(_) => 0.0,
    })
}

#[inline]
pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
