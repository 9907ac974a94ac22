//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! returning widget trees.

mod input;
mod result;
mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};
use veritas_app::{App, InputState};

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App, input: &InputState) {
    const TITLE_HEIGHT: u16 = 1;
    const INPUT_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;
    const RESULT_MIN_HEIGHT: u16 = 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(RESULT_MIN_HEIGHT),
        ])
        .split(frame.area());

    let [title_area, input_area, status_area, result_area] = chunks.as_ref() else {
        return;
    };

    render_title(frame, *title_area);
    input::render(frame, app, input, *input_area);
    status::render(frame, app, input, *status_area);
    result::render(frame, app, *result_area);
}

/// Render the application title.
fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("veritas.ai")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}
