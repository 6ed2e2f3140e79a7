use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Terminal,
};
use tracing::debug;

use scrollpager_core::AppConfig;
use scrollpager_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    scroll::ScrollConfigExt,
    widgets::{ScrollButtonWidget, SnapStripWidget, StatusBarWidget},
};

const BUTTON_WIDTH: u16 = 16;

pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    or_restore(
        execute!(stdout, EnterAlternateScreen, SetTitle("scrollpager")),
        restore,
    )?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = or_restore(Terminal::new(backend), restore)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms)
        .with_animation_tick(config.scroll.animation_tick_duration());
    let mut app = App::new(config);

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    let mut viewport = (0, 0);

    loop {
        let animating = app.tick();

        terminal.draw(|frame| {
            let [strip_area, buttons_area, status_area] = split(frame.area());

            // Keep the engine's idea of the viewport in sync with the layout
            let size = SnapStripWidget::viewport(strip_area);
            if size != viewport {
                viewport = size;
                app.set_viewport(size.0, size.1);
            }

            SnapStripWidget::render(frame, strip_area, app);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(BUTTON_WIDTH),
                    Constraint::Min(0),
                    Constraint::Length(BUTTON_WIDTH),
                ])
                .split(buttons_area);
            for (index, area) in [columns[0], columns[2]].into_iter().enumerate() {
                if let Some(button) = app.buttons.get(index) {
                    ScrollButtonWidget::render(frame, area, button, app.style(), app.focus == index);
                }
            }

            StatusBarWidget::render(frame, status_area, app);
        })?;

        if let Some(event) = event_handler.next(animating)? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key);
                    debug!(?action, "Key action");
                    app.handle_action(action);
                }
                AppEvent::Resize(_, _) => {
                    // Viewport is re-measured on the next draw
                    viewport = (0, 0);
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Undo terminal setup when a setup step fails
fn or_restore<T>(step: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    step.inspect_err(|_| undo())
}

fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn split(area: Rect) -> [Rect; 3] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    [rows[0], rows[1], rows[2]]
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_failed_setup_step_restores_terminal() {
        let restored = Cell::new(false);
        let step: io::Result<()> = Err(io::Error::other("no tty"));
        assert!(or_restore(step, || restored.set(true)).is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_step_keeps_terminal() {
        let restored = Cell::new(false);
        assert_eq!(or_restore(Ok(7), || restored.set(true)).unwrap(), 7);
        assert!(!restored.get());
    }

    #[test]
    fn test_split_reserves_button_and_status_rows() {
        let [strip, buttons, status] = split(Rect::new(0, 0, 80, 24));
        assert_eq!(buttons.height, 3);
        assert_eq!(status.height, 1);
        assert_eq!(strip.height, 20);
    }
}
