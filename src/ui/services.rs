//! Service status badges for the fixed known set.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DashboardState;
use crate::ui::theme::service_badge_style;

/// The dashboard tracks exactly these units; anything else the agent
/// reports is retained but not displayed.
pub const KNOWN_SERVICES: [&str; 4] = ["ssh", "nginx", "fail2ban", "ufw"];

pub fn draw_services(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let mut spans: Vec<Span> = Vec::with_capacity(KNOWN_SERVICES.len() * 3);
    for name in KNOWN_SERVICES {
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("{name} "),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(badge(state.services.get(name).map(String::as_str)));
    }

    let line = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Services"));
    f.render_widget(line, area);
}

// Exact equality to "active" flips the badge; every other reported string
// shows Inactive. Never-reported services stay at the placeholder.
fn badge(status: Option<&str>) -> Span<'static> {
    match status {
        Some("active") => Span::styled("● Active", service_badge_style(true)),
        Some(_) => Span::styled("● Inactive", service_badge_style(false)),
        None => Span::styled("○ unknown", Style::default().fg(Color::DarkGray)),
    }
}
