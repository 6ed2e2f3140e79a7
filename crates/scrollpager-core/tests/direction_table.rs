use scrollpager_core::{
    resolve_direction, Axis, ContainerStyle, DirectionToken, Sign, TextDirection, WritingMode,
};

use Axis::{X, Y};
use Sign::{Negative as N, Positive as P};

fn style(writing_mode: WritingMode, direction: TextDirection) -> ContainerStyle {
    ContainerStyle {
        writing_mode,
        direction,
        ..Default::default()
    }
}

/// Expected (axis, sign) per token for
/// [horizontal ltr, horizontal rtl, vertical ltr, vertical rtl]
const TABLE: [(&str, [(Axis, Sign); 4]); 8] = [
    ("left", [(X, N), (X, N), (X, N), (X, N)]),
    ("right", [(X, P), (X, P), (X, P), (X, P)]),
    ("up", [(Y, N), (Y, N), (Y, N), (Y, N)]),
    ("down", [(Y, P), (Y, P), (Y, P), (Y, P)]),
    ("inline-start", [(X, N), (X, P), (Y, N), (Y, N)]),
    ("inline-end", [(X, P), (X, N), (Y, P), (Y, P)]),
    ("block-start", [(Y, N), (Y, N), (X, N), (X, N)]),
    ("block-end", [(Y, P), (Y, P), (X, P), (X, P)]),
];

#[test]
fn direction_table_matches_for_every_style() {
    let styles = [
        style(WritingMode::HorizontalTb, TextDirection::Ltr),
        style(WritingMode::HorizontalTb, TextDirection::Rtl),
        style(WritingMode::VerticalRl, TextDirection::Ltr),
        style(WritingMode::VerticalRl, TextDirection::Rtl),
    ];

    for (token, expected) in TABLE {
        for (style, (axis, sign)) in styles.iter().zip(expected) {
            let descriptor = resolve_direction(DirectionToken::parse(token), Some(style));
            assert_eq!(
                (descriptor.axis, descriptor.sign),
                (axis, sign),
                "token {} with {:?}/{:?}",
                token,
                style.writing_mode,
                style.direction
            );
        }
    }
}

#[test]
fn every_vertical_writing_mode_swaps_logical_axes() {
    for mode in [WritingMode::VerticalRl, WritingMode::VerticalLr] {
        let style = style(mode, TextDirection::Ltr);
        assert_eq!(resolve_direction(DirectionToken::InlineEnd, Some(&style)).axis, Y);
        assert_eq!(resolve_direction(DirectionToken::BlockEnd, Some(&style)).axis, X);
    }
}

#[test]
fn sideways_writing_modes_page_horizontally() {
    for mode in [WritingMode::SidewaysRl, WritingMode::SidewaysLr] {
        let style = style(mode, TextDirection::Rtl);
        let end = resolve_direction(DirectionToken::InlineEnd, Some(&style));
        assert_eq!((end.axis, end.sign), (X, N));
        assert_eq!(resolve_direction(DirectionToken::BlockEnd, Some(&style)).axis, Y);
    }
}

#[test]
fn logical_labels() {
    let style = style(WritingMode::HorizontalTb, TextDirection::Rtl);
    for (token, label) in [
        ("inline-start", "Previous"),
        ("block-start", "Previous"),
        ("inline-end", "Next"),
        ("block-end", "Next"),
        ("right", "Scroll right"),
        ("up", "Scroll up"),
    ] {
        assert_eq!(resolve_direction(token.into(), Some(&style)).label, label);
    }
}

#[test]
fn unknown_token_resolves_like_right() {
    let style = style(WritingMode::VerticalLr, TextDirection::Rtl);
    assert_eq!(
        resolve_direction(DirectionToken::parse("diagonal"), Some(&style)),
        resolve_direction(DirectionToken::Right, Some(&style))
    );
}
