//! Sampled container state handed to the engine by a host adapter.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::{Padding, Point, Rect, Size};

/// CSS writing mode of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
    VerticalLr,
    SidewaysRl,
    SidewaysLr,
}

impl WritingMode {
    /// Parse a computed `writing-mode` value; unknown values are horizontal
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "vertical-rl" => WritingMode::VerticalRl,
            "vertical-lr" => WritingMode::VerticalLr,
            "sideways-rl" => WritingMode::SidewaysRl,
            "sideways-lr" => WritingMode::SidewaysLr,
            _ => WritingMode::HorizontalTb,
        }
    }

    /// Inline axis runs vertically. Only the `vertical-*` modes count;
    /// `sideways-*` keep horizontal paging.
    pub fn is_vertical(&self) -> bool {
        matches!(self, WritingMode::VerticalRl | WritingMode::VerticalLr)
    }
}

impl From<String> for WritingMode {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// CSS `direction` of the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("rtl") {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }
}

impl From<String> for TextDirection {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Style properties of the container that the engine consults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerStyle {
    #[serde(default)]
    pub writing_mode: WritingMode,
    #[serde(default)]
    pub direction: TextDirection,
    /// Raw `scroll-snap-type`, e.g. `"x mandatory"`
    #[serde(default)]
    pub snap_type: String,
    #[serde(default)]
    pub scroll_padding: Padding,
}

/// An immediate child of the container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildSnapshot {
    /// Raw `scroll-snap-align`, e.g. `"start"` or `"none center"`
    #[serde(default)]
    pub snap_align: String,
    /// Border box in the container's content coordinates
    #[serde(default)]
    pub rect: Rect,
}

impl ChildSnapshot {
    pub fn new(snap_align: impl Into<String>, rect: Rect) -> Self {
        Self {
            snap_align: snap_align.into(),
            rect,
        }
    }
}

/// Everything the engine reads from a scroll container, sampled at one instant.
///
/// Hosts must take a fresh snapshot for every query: the scroll offset and
/// layout may change between activations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSnapshot {
    #[serde(default)]
    pub scroll: Point,
    #[serde(default)]
    pub viewport: Size,
    /// Total scrollable extent
    #[serde(default)]
    pub content: Size,
    #[serde(default)]
    pub style: ContainerStyle,
    #[serde(default)]
    pub children: Vec<ChildSnapshot>,
}

impl ContainerSnapshot {
    /// Load a snapshot from a `.toml` or JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Ok(toml::from_str(&content)?)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn from_json(content: &str) -> crate::Result<Self> {
        if content.trim().is_empty() {
            return Err(crate::Error::Snapshot("empty document".to_string()));
        }
        Ok(serde_json::from_str(content)?)
    }
}
