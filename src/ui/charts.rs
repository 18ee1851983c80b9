//! Rolling usage charts, one braille line graph per metric.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::history::{ChartSet, SeriesBuffer};
use crate::ui::theme::{CPU_CHART, DISK_CHART, MEMORY_CHART};

pub fn draw_charts(f: &mut ratatui::Frame<'_>, area: Rect, charts: &ChartSet) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    draw_usage_chart(f, cols[0], "CPU Usage", &charts.cpu, CPU_CHART);
    draw_usage_chart(f, cols[1], "Memory Usage", &charts.memory, MEMORY_CHART);
    draw_usage_chart(f, cols[2], "Disk Usage", &charts.disk, DISK_CHART);
}

fn draw_usage_chart(
    f: &mut ratatui::Frame<'_>,
    area: Rect,
    name: &str,
    series: &SeriesBuffer,
    color: Color,
) {
    let title = match series.latest() {
        Some(v) => format!("{name} (now: {v:>5.1}%)"),
        None => name.to_string(),
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    if series.is_empty() {
        f.render_widget(block, area);
        return;
    }

    let points = series.chart_points();
    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&points);

    // X spans the full window so a filling buffer grows rightward.
    let max_x = series.capacity().saturating_sub(1).max(1) as f64;
    let x_labels = vec![
        Span::raw(series.first_label().unwrap_or_default().to_string()),
        Span::raw(series.last_label().unwrap_or_default().to_string()),
    ];
    let y_labels = vec![Span::raw("0%"), Span::raw("50%"), Span::raw("100%")];

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([0.0, max_x])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(y_labels)
                .style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(chart, area);
}
