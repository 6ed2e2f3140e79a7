use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct SnapStripWidget;

impl SnapStripWidget {
    /// Viewport size in cells for a strip drawn into `area`
    pub fn viewport(area: Rect) -> (u16, u16) {
        let inner = Self::frame_block("").inner(area);
        (inner.width, inner.height)
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let offset = app.animator.current();
        let max = app.max_offset();
        let title = format!(" Strip {:.0}/{:.0} ", offset.x, max.x);
        let block = Self::frame_block(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let snapshot = app.snapshot();
        let left = offset.x.round();

        for (card, child) in app.cards.iter().zip(&snapshot.children) {
            let start = (child.rect.x - left).max(0.0);
            let end = (child.rect.x + child.rect.width - left).min(inner.width as f64);
            if end <= start {
                continue;
            }

            let cell = Rect {
                x: inner.x + start as u16,
                y: inner.y,
                width: (end - start) as u16,
                height: inner.height,
            };
            let color = align_color(card.snap_align);
            let card_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(card.title.as_str());
            let body = Paragraph::new(Line::from(card.snap_align))
                .alignment(Alignment::Center)
                .style(Style::default().fg(GruvboxMaterial::GREY0))
                .block(card_block);
            frame.render_widget(body, cell);
        }
    }

    fn frame_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GruvboxMaterial::GREY0))
            .title(title)
            .style(Style::default().bg(GruvboxMaterial::BG0))
    }
}

fn align_color(snap_align: &str) -> Color {
    match snap_align {
        "start" => GruvboxMaterial::BLUE,
        "center" => GruvboxMaterial::AQUA,
        "end" => GruvboxMaterial::PURPLE,
        _ => GruvboxMaterial::GREY0,
    }
}
