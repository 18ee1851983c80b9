//! Top header with hostname and the last-refresh stamp.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};

use crate::state::DashboardState;
use crate::ui::util::format_clock;

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let host = state.hostname.as_deref().unwrap_or("connecting...");
    let refreshed = state
        .last_refresh
        .as_ref()
        .map(|t| format_clock(t))
        .unwrap_or_else(|| "never".into());
    let title = format!(
        "opstop — host: {host} | last update: {refreshed}  (press 'q' to quit, 'r' to refresh)"
    );
    f.render_widget(Block::default().title(title).borders(Borders::BOTTOM), area);
}
