//! Alert table: one row per alert, styled by state bucket.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::classify::alert_tone;
use crate::state::DashboardState;
use crate::types::Alert;
use crate::ui::theme::alert_state_style;
use crate::ui::util::format_alert_time;

const NO_DATA: &str = "No alerts recorded";

const COLS: [Constraint; 6] = [
    Constraint::Percentage(24), // Alert
    Constraint::Percentage(20), // State
    Constraint::Percentage(14), // Host
    Constraint::Percentage(12), // Value
    Constraint::Percentage(12), // Threshold
    Constraint::Percentage(18), // Time
];

pub fn draw_alerts(f: &mut ratatui::Frame<'_>, area: Rect, state: &DashboardState) {
    let (rows, count) = match state.alerts.as_ref() {
        Some(payload) => (
            body_rows(&payload.alerts),
            payload.count.unwrap_or(payload.alerts.len() as u64),
        ),
        None => (body_rows(&[]), 0),
    };

    let header = Row::new(vec!["Alert", "State", "Host", "Value", "Threshold", "Time"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, COLS.to_vec())
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Alerts ({count})")),
        );
    f.render_widget(table, area);
}

/// Rebuilt in full every frame. An empty list yields exactly one
/// placeholder row rather than a header-only table.
fn body_rows(alerts: &[Alert]) -> Vec<Row<'static>> {
    if alerts.is_empty() {
        return vec![Row::new(vec![Cell::from(NO_DATA)])
            .style(Style::default().fg(Color::DarkGray))];
    }

    alerts
        .iter()
        .map(|a| {
            let tone = alert_tone(&a.state);
            Row::new(vec![
                Cell::from(a.alert.clone())
                    .style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(a.state.clone()).style(alert_state_style(tone)),
                Cell::from(a.host.clone()),
                Cell::from(a.value.clone()),
                Cell::from(a.threshold.clone()),
                Cell::from(format_alert_time(&a.timestamp)),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(state: &str) -> Alert {
        Alert {
            alert: "disk_usage".into(),
            state: state.into(),
            host: "web-01".into(),
            value: "91".into(),
            threshold: "90".into(),
            timestamp: "2026-08-08 10:00:00".into(),
        }
    }

    #[test]
    fn empty_list_renders_single_placeholder_row() {
        assert_eq!(body_rows(&[]).len(), 1);
    }

    #[test]
    fn one_row_per_alert() {
        let alerts = vec![alert("ALERT"), alert("RECOVERED"), alert("RECOVERY_FAILED_RETRY2")];
        assert_eq!(body_rows(&alerts).len(), 3);
    }
}
