//! Direction resolution: maps a direction token plus the container's
//! writing mode and text direction onto a physical axis and sign.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::container::{ContainerStyle, TextDirection};
use crate::geometry::Axis;

/// Recognized direction tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectionToken {
    Left,
    #[default]
    Right,
    Up,
    Down,
    InlineStart,
    InlineEnd,
    BlockStart,
    BlockEnd,
}

impl DirectionToken {
    pub const ALL: [DirectionToken; 8] = [
        DirectionToken::Left,
        DirectionToken::Right,
        DirectionToken::Up,
        DirectionToken::Down,
        DirectionToken::InlineStart,
        DirectionToken::InlineEnd,
        DirectionToken::BlockStart,
        DirectionToken::BlockEnd,
    ];

    /// Parse a token case-insensitively; anything unrecognized is `Right`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" => DirectionToken::Left,
            "right" => DirectionToken::Right,
            "up" => DirectionToken::Up,
            "down" => DirectionToken::Down,
            "inline-start" => DirectionToken::InlineStart,
            "inline-end" => DirectionToken::InlineEnd,
            "block-start" => DirectionToken::BlockStart,
            "block-end" => DirectionToken::BlockEnd,
            _ => DirectionToken::Right,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionToken::Left => "left",
            DirectionToken::Right => "right",
            DirectionToken::Up => "up",
            DirectionToken::Down => "down",
            DirectionToken::InlineStart => "inline-start",
            DirectionToken::InlineEnd => "inline-end",
            DirectionToken::BlockStart => "block-start",
            DirectionToken::BlockEnd => "block-end",
        }
    }
}

impl From<&str> for DirectionToken {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for DirectionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of travel along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        matches!(self, Sign::Positive)
    }

    pub fn flipped(&self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sign::Negative => "-1",
            Sign::Positive => "+1",
        })
    }
}

/// Resolved physical direction with its fallback accessible label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionDescriptor {
    pub axis: Axis,
    pub sign: Sign,
    pub label: &'static str,
}

impl DirectionDescriptor {
    const fn new(axis: Axis, sign: Sign, label: &'static str) -> Self {
        Self { axis, sign, label }
    }
}

impl Default for DirectionDescriptor {
    /// Descriptor used when no container is attached
    fn default() -> Self {
        Self::new(Axis::X, Sign::Positive, "Next")
    }
}

/// Resolve `token` against the container style.
///
/// Physical tokens ignore the style. Logical tokens take their axis from
/// the writing mode; only the inline tokens in a horizontal writing mode
/// flip their sign for right-to-left text.
pub fn resolve_direction(
    token: DirectionToken,
    style: Option<&ContainerStyle>,
) -> DirectionDescriptor {
    use Axis::{X, Y};
    use Sign::{Negative, Positive};

    let Some(style) = style else {
        return DirectionDescriptor::default();
    };

    let vertical = style.writing_mode.is_vertical();
    let rtl = style.direction == TextDirection::Rtl;
    let (inline_axis, block_axis) = if vertical { (Y, X) } else { (X, Y) };
    let inline_sign = |sign: Sign| if rtl && !vertical { sign.flipped() } else { sign };

    match token {
        DirectionToken::Left => DirectionDescriptor::new(X, Negative, "Scroll left"),
        DirectionToken::Right => DirectionDescriptor::new(X, Positive, "Scroll right"),
        DirectionToken::Up => DirectionDescriptor::new(Y, Negative, "Scroll up"),
        DirectionToken::Down => DirectionDescriptor::new(Y, Positive, "Scroll down"),
        DirectionToken::InlineStart => {
            DirectionDescriptor::new(inline_axis, inline_sign(Negative), "Previous")
        }
        DirectionToken::InlineEnd => {
            DirectionDescriptor::new(inline_axis, inline_sign(Positive), "Next")
        }
        DirectionToken::BlockStart => DirectionDescriptor::new(block_axis, Negative, "Previous"),
        DirectionToken::BlockEnd => DirectionDescriptor::new(block_axis, Positive, "Next"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::WritingMode;

    fn style(writing_mode: WritingMode, direction: TextDirection) -> ContainerStyle {
        ContainerStyle {
            writing_mode,
            direction,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(DirectionToken::parse("INLINE-End"), DirectionToken::InlineEnd);
        assert_eq!(DirectionToken::parse(" up "), DirectionToken::Up);
    }

    #[test]
    fn test_unknown_token_is_right() {
        assert_eq!(DirectionToken::parse("sideways"), DirectionToken::Right);
        assert_eq!(DirectionToken::parse(""), DirectionToken::Right);
    }

    #[test]
    fn test_no_container_default() {
        for token in DirectionToken::ALL {
            let descriptor = resolve_direction(token, None);
            assert_eq!(descriptor, DirectionDescriptor::new(Axis::X, Sign::Positive, "Next"));
        }
    }

    #[test]
    fn test_physical_labels() {
        let style = style(WritingMode::VerticalRl, TextDirection::Rtl);
        let left = resolve_direction(DirectionToken::Left, Some(&style));
        assert_eq!(left, DirectionDescriptor::new(Axis::X, Sign::Negative, "Scroll left"));
        let down = resolve_direction(DirectionToken::Down, Some(&style));
        assert_eq!(down, DirectionDescriptor::new(Axis::Y, Sign::Positive, "Scroll down"));
    }

    #[test]
    fn test_vertical_rtl_inline_does_not_flip() {
        let style = style(WritingMode::VerticalLr, TextDirection::Rtl);
        let start = resolve_direction(DirectionToken::InlineStart, Some(&style));
        assert_eq!(start.axis, Axis::Y);
        assert_eq!(start.sign, Sign::Negative);
        assert_eq!(start.label, "Previous");
    }

    #[test]
    fn test_display_round_trips_tokens() {
        for token in DirectionToken::ALL {
            assert_eq!(DirectionToken::parse(&token.to_string()), token);
        }
    }
}
