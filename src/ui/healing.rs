//! Self-healing activity log.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::classify::healing_tone;
use crate::state::DashboardState;
use crate::ui::theme::healing_style;

const NO_DATA: &str = "No self-healing events recorded";

pub fn draw_healing(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let (lines, count) = match state.healing.as_ref() {
        Some(payload) => (
            event_lines(&payload.events),
            payload.count.unwrap_or(payload.events.len() as u64),
        ),
        None => (event_lines(&[]), 0),
    };

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Self-Healing Log ({count})")),
    );
    f.render_widget(log, area);
}

/// Full replace each frame; overlapping log windows show their duplicates.
fn event_lines(events: &[String]) -> Vec<Line<'static>> {
    if events.is_empty() {
        return vec![Line::styled(NO_DATA, Style::default().fg(Color::DarkGray))];
    }

    events
        .iter()
        .map(|event| Line::styled(event.clone(), healing_style(healing_tone(event))))
        .collect()
}
