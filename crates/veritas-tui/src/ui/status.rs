//! Status line
//!
//! Shows the rotating progress label while a request is in flight, and key
//! hints otherwise. The rotation is cosmetic: the label says nothing about
//! actual backend progress.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use veritas_app::{App, CheckState, InputState, status_message};

/// Render the status line.
pub fn render(frame: &mut Frame, app: &App, input: &InputState, area: Rect) {
    let status = match app.check_state() {
        CheckState::Submitting { status_index } => Span::styled(
            status_message(*status_index),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
        ),
        CheckState::Idle if !app.can_submit(input.buffer()) => {
            Span::styled("Type a claim to check", Style::default().fg(Color::DarkGray))
        },
        CheckState::Idle => {
            Span::styled("Press Enter to check", Style::default().fg(Color::DarkGray))
        },
        CheckState::Succeeded(_) | CheckState::Failed { .. } => Span::styled(
            "Press Enter to check again",
            Style::default().fg(Color::DarkGray),
        ),
    };

    let status_line = Line::from(vec![
        Span::raw(" "),
        status,
        Span::styled("  [Esc] quit", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(status_line), area);
}
