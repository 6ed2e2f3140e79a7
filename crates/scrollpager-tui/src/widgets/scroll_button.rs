use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use scrollpager_core::{resolve_direction, Axis, ContainerStyle, Sign};

use crate::button::ScrollButton;
use crate::theme::GruvboxMaterial;

pub struct ScrollButtonWidget;

impl ScrollButtonWidget {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        button: &ScrollButton,
        style: &ContainerStyle,
        focused: bool,
    ) {
        let descriptor = resolve_direction(button.direction(), Some(style));
        let arrow = match (descriptor.axis, descriptor.sign) {
            (Axis::X, Sign::Negative) => "◀",
            (Axis::X, Sign::Positive) => "▶",
            (Axis::Y, Sign::Negative) => "▲",
            (Axis::Y, Sign::Positive) => "▼",
        };

        let (fg, border) = if button.is_disabled() {
            (GruvboxMaterial::GREY0, GruvboxMaterial::BG2)
        } else if focused {
            (GruvboxMaterial::YELLOW, GruvboxMaterial::YELLOW)
        } else {
            (GruvboxMaterial::FG0, GruvboxMaterial::GREY0)
        };

        let mut text_style = Style::default().fg(fg);
        if focused {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        let line = Line::from(vec![
            Span::styled(format!("{} ", arrow), text_style),
            Span::styled(button.accessible_label().to_string(), text_style),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(GruvboxMaterial::BG0));

        frame.render_widget(
            Paragraph::new(line).alignment(Alignment::Center).block(block),
            area,
        );
    }
}
