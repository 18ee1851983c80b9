//! Metric gauges: CPU, memory, disk, plus the uptime card.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::state::DashboardState;
use crate::ui::theme::level_color;
use crate::ui::util::format_uptime;

pub fn draw_metrics(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cpu_title = match state.cpu.as_ref().and_then(|c| c.load_avg.as_ref()) {
        Some(load) => format!(
            "CPU — load {} / {} / {}",
            load.one, load.five, load.fifteen
        ),
        None => "CPU".to_string(),
    };
    let cpu_pct = state.cpu.as_ref().and_then(|c| c.usage_percent);
    draw_pct_gauge(f, cols[0], cpu_title, cpu_pct);

    let mem_title = match state.memory.as_ref() {
        Some(m) => match (m.used_mb, m.total_mb) {
            (Some(used), Some(total)) => format!("Memory — {used:.0} / {total:.0} MB"),
            _ => "Memory".to_string(),
        },
        None => "Memory".to_string(),
    };
    let mem_pct = state.memory.as_ref().and_then(|m| m.used_percent);
    draw_pct_gauge(f, cols[1], mem_title, mem_pct);

    let disk_title = match state.disk.as_ref() {
        Some(d) => match (d.used_gb, d.total_gb) {
            (Some(used), Some(total)) => format!("Disk — {used:.1} / {total:.1} GB"),
            _ => "Disk".to_string(),
        },
        None => "Disk".to_string(),
    };
    let disk_pct = state.disk.as_ref().and_then(|d| d.used_percent);
    draw_pct_gauge(f, cols[2], disk_title, disk_pct);

    let uptime = state
        .uptime_seconds
        .map(format_uptime)
        .unwrap_or_else(|| "-".into());
    let card = Paragraph::new(uptime)
        .block(Block::default().borders(Borders::ALL).title("Uptime"))
        .centered();
    f.render_widget(card, cols[3]);
}

fn draw_pct_gauge(f: &mut ratatui::Frame<'_>, area: Rect, title: String, pct: Option<f64>) {
    let value = pct.unwrap_or(0.0).clamp(0.0, 100.0);
    let label = match pct {
        Some(v) => format!("{v:.1}%"),
        None => "-".to_string(),
    };
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(level_color(value)))
        .percent(value.round() as u16)
        .label(label);
    f.render_widget(g, area);
}
