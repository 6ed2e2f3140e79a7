use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::theme::GruvboxMaterial;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let style = app.style();
        let snap = if style.snap_type.is_empty() {
            "snap off"
        } else {
            style.snap_type.as_str()
        };

        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {:?} | {:?} | {}",
                style.writing_mode, style.direction, snap
            ),
        };

        let help_hint = " q:quit tab:focus enter:page w:writing-mode s:snap ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(GruvboxMaterial::FG0)
                    .bg(GruvboxMaterial::BG2),
            ),
            Span::styled(
                " ".repeat(padding_len),
                Style::default().bg(GruvboxMaterial::BG1),
            ),
            Span::styled(
                help_hint,
                Style::default()
                    .fg(GruvboxMaterial::GREEN)
                    .bg(GruvboxMaterial::BG1),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
