//! Result card
//!
//! Projects the terminal lifecycle state into the verdict banner,
//! justification, and evidence list. Pure projection: renders nothing for
//! non-terminal states, mutates nothing, and tolerates absent or empty
//! fields.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use veritas_app::{App, CheckState};
use veritas_client::Verification;

/// Render the result card.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    match app.check_state() {
        CheckState::Idle | CheckState::Submitting { .. } => {},
        CheckState::Failed { message } => render_error(frame, message, area),
        CheckState::Succeeded(verification) => render_verdict(frame, verification, area),
    }
}

/// Render the inline failure message.
fn render_error(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Result ");

    let line = Line::from(vec![
        Span::styled("✗ ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);

    let paragraph = Paragraph::new(line).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the verdict banner, justification, and evidence links.
fn render_verdict(frame: &mut Frame, verification: &Verification, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Result ");

    // Only the literal "True" gets the affirming color.
    let badge_color = if verification.is_true() { Color::Green } else { Color::Red };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Verdict: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!(" {} ", verification.verdict),
                Style::default()
                    .fg(Color::White)
                    .bg(badge_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Justification: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(verification.justification.as_str()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Sources:", Style::default().add_modifier(Modifier::BOLD))),
    ];

    for (index, url) in verification.evidence_urls.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", index.saturating_add(1)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                url.as_str(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
