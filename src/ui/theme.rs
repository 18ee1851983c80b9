//! Shared UI theme: chart colors and tone-to-style mapping.

use ratatui::style::{Color, Modifier, Style};

use crate::classify::{AlertTone, HealTone};

// Chart line colors, one per metric.
pub const CPU_CHART: Color = Color::Red;
pub const MEMORY_CHART: Color = Color::Magenta;
pub const DISK_CHART: Color = Color::Cyan;

/// Gauge fill by utilization level.
pub fn level_color(pct: f64) -> Color {
    if pct < 70.0 {
        Color::Green
    } else if pct < 90.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

pub fn alert_state_style(tone: AlertTone) -> Style {
    match tone {
        AlertTone::Recovered => Style::default().fg(Color::Green),
        AlertTone::RecoveryFailed => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
        AlertTone::Active => Style::default().fg(Color::Yellow),
    }
}

pub fn healing_style(tone: HealTone) -> Style {
    match tone {
        HealTone::Success => Style::default().fg(Color::Green),
        HealTone::Error => Style::default().fg(Color::Red),
        HealTone::Neutral => Style::default().fg(Color::Gray),
    }
}

pub fn service_badge_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}
