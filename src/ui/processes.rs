//! Top-CPU and top-memory process lists.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::state::DashboardState;
use crate::types::ProcessInfo;
use crate::ui::util::format_pct;

/// Rows shown per list; the API may send more, ranked on its side.
const MAX_ROWS: usize = 5;

pub fn draw_process_lists(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_list(f, rows[0], "Top CPU", &state.top_cpu, |p| p.cpu_percent);
    draw_list(f, rows[1], "Top Memory", &state.top_memory, |p| {
        p.mem_percent
    });
}

fn draw_list(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    procs: &[ProcessInfo],
    metric: fn(&ProcessInfo) -> Option<f64>,
) {
    let lines: Vec<Line> = if procs.is_empty() {
        vec![Line::from(Span::styled(
            "no data",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        procs
            .iter()
            .take(MAX_ROWS)
            .map(|p| {
                Line::from(vec![
                    Span::styled(
                        p.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" (PID: {})", p.pid),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw("  "),
                    Span::styled(format_pct(metric(p)), Style::default().fg(Color::Cyan)),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(list, area);
}
