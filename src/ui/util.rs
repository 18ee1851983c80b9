//! Small display helpers: uptime, clocks, percentages.

use chrono::{DateTime, Local, NaiveDateTime};

/// Day/hour/minute decomposition, coarsest nonzero unit first. Seconds are
/// never shown and units are not pluralized.
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub fn format_clock(t: &DateTime<Local>) -> String {
    t.format("%H:%M:%S").to_string()
}

/// X-axis label for a freshly recorded chart sample.
pub fn chart_label(t: &DateTime<Local>) -> String {
    t.format("%H:%M").to_string()
}

/// Reformat an alert timestamp to local HH:MM:SS. The alert log has carried
/// a few shapes over time; anything unrecognized is shown as-is.
pub fn format_alert_time(raw: &str) -> String {
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return t.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return t.format("%H:%M:%S").to_string();
    }
    if let Ok(epoch) = raw.trim().parse::<i64>() {
        if let Some(t) = DateTime::from_timestamp(epoch, 0) {
            return t.with_timezone(&Local).format("%H:%M:%S").to_string();
        }
    }
    raw.to_string()
}

pub fn format_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}%"),
        None => "-".to_string(),
    }
}
