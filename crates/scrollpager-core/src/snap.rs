//! Scroll snap inspection: whether snapping applies on an axis and which
//! scroll offsets the container's children would snap to.

use tracing::debug;

use crate::config::PagingConfig;
use crate::container::{ContainerSnapshot, ContainerStyle, WritingMode};
use crate::geometry::{read_geometry, Axis, AxisGeometry};

/// Axis part of `scroll-snap-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAxis {
    X,
    Y,
    Block,
    Inline,
}

/// Parsed `scroll-snap-type` (strictness is irrelevant to paging)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapType {
    #[default]
    None,
    Axis(SnapAxis),
    Both,
}

impl SnapType {
    /// Parse values such as `"x mandatory"`, `"both proximity"` or `"none"`.
    ///
    /// Only the axis token is read; strictness and anything after it are
    /// ignored. Empty values and unknown axis keywords mean no snapping.
    pub fn parse(value: &str) -> Self {
        let Some(axis) = value.split_whitespace().next() else {
            return SnapType::None;
        };

        match axis.to_ascii_lowercase().as_str() {
            "x" => SnapType::Axis(SnapAxis::X),
            "y" => SnapType::Axis(SnapAxis::Y),
            "block" => SnapType::Axis(SnapAxis::Block),
            "inline" => SnapType::Axis(SnapAxis::Inline),
            "both" => SnapType::Both,
            _ => SnapType::None,
        }
    }

    /// Snapping applies to `axis` under the given writing mode
    pub fn applies_to(&self, axis: Axis, writing_mode: WritingMode) -> bool {
        let vertical = writing_mode.is_vertical();
        match self {
            SnapType::None => false,
            SnapType::Both => true,
            SnapType::Axis(SnapAxis::X) => axis == Axis::X,
            SnapType::Axis(SnapAxis::Y) => axis == Axis::Y,
            SnapType::Axis(SnapAxis::Inline) => axis == if vertical { Axis::Y } else { Axis::X },
            SnapType::Axis(SnapAxis::Block) => axis == if vertical { Axis::X } else { Axis::Y },
        }
    }
}

/// Check whether the container snaps along `axis`
pub fn snap_active(style: &ContainerStyle, axis: Axis) -> bool {
    SnapType::parse(&style.snap_type).applies_to(axis, style.writing_mode)
}

/// Resolved `scroll-snap-align` of a child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapAlign {
    Start,
    Center,
    End,
}

impl SnapAlign {
    /// Parse a one- or two-component `scroll-snap-align`.
    ///
    /// With two components the second (inline) one wins, and an inline
    /// `none` aligns at the start. Returns `None` for children that are not
    /// snap candidates: empty or `none` values and unknown keywords.
    pub fn parse(value: &str) -> Option<Self> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        let keyword = match parts.as_slice() {
            [single] => *single,
            [_, inline] if inline.eq_ignore_ascii_case("none") => "start",
            [_, inline] => *inline,
            _ => return None,
        };

        match keyword.to_ascii_lowercase().as_str() {
            "start" => Some(SnapAlign::Start),
            "center" => Some(SnapAlign::Center),
            "end" => Some(SnapAlign::End),
            _ => None,
        }
    }
}

/// Scroll offset that aligns a child spanning `[child_start, child_end]`
/// inside a viewport of extent `viewport` with `(start, end)` scroll padding
pub fn snap_position(
    align: SnapAlign,
    child_start: f64,
    child_end: f64,
    viewport: f64,
    padding: (f64, f64),
) -> f64 {
    let (padding_start, padding_end) = padding;
    match align {
        SnapAlign::Start => child_start - padding_start,
        SnapAlign::End => child_end - (viewport - padding_end),
        SnapAlign::Center => (child_start + child_end) / 2.0 - viewport / 2.0,
    }
}

/// Collect the snap offsets of the container's children along `axis`.
///
/// Returns an empty list when snapping is off for the axis. The list is in
/// child order and may contain duplicates.
pub fn snap_candidates(
    container: &ContainerSnapshot,
    axis: Axis,
    config: &PagingConfig,
) -> Vec<f64> {
    if !snap_active(&container.style, axis) {
        return Vec::new();
    }

    let geometry = read_geometry(container, axis);
    let padding = container.style.scroll_padding.along(axis);

    let candidates: Vec<f64> = container
        .children
        .iter()
        .filter_map(|child| {
            let align = SnapAlign::parse(&child.snap_align)?;
            let position = snap_position(
                align,
                child.rect.start(axis),
                child.rect.end(axis),
                geometry.viewport,
                padding,
            );
            Some(if config.clamp_candidates {
                clamp_to_range(position, &geometry)
            } else {
                position
            })
        })
        .collect();

    debug!(
        axis = %axis,
        children = container.children.len(),
        candidates = candidates.len(),
        "Collected snap candidates"
    );

    candidates
}

fn clamp_to_range(position: f64, geometry: &AxisGeometry) -> f64 {
    position.clamp(0.0, geometry.max_offset())
}
