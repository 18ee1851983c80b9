//! Substring classification of alert states and healing log lines.
//!
//! Each category is an ordered rule list evaluated first-match-wins, so the
//! tie-break between overlapping rules is explicit and testable.

/// Display bucket for an alert's open-ended state string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertTone {
    Recovered,
    RecoveryFailed,
    Active,
}

type Rule<T> = (fn(&str) -> bool, T);

const ALERT_RULES: &[Rule<AlertTone>] = &[
    (|state| state == "RECOVERED", AlertTone::Recovered),
    (|state| state.contains("RECOVERY_FAILED"), AlertTone::RecoveryFailed),
];

pub fn alert_tone(state: &str) -> AlertTone {
    ALERT_RULES
        .iter()
        .find(|(matches, _)| matches(state))
        .map(|(_, tone)| *tone)
        .unwrap_or(AlertTone::Active)
}

/// Display bucket for a free-text healing log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealTone {
    Success,
    Error,
    Neutral,
}

// Case-sensitive on purpose: the healing log writer emits these exact
// markers. The success rule is checked first.
const HEALING_RULES: &[Rule<HealTone>] = &[
    (
        |line| line.contains("successful") || line.contains("SUCCESS"),
        HealTone::Success,
    ),
    (
        |line| line.contains("failed") || line.contains("ERROR"),
        HealTone::Error,
    ),
];

pub fn healing_tone(line: &str) -> HealTone {
    HEALING_RULES
        .iter()
        .find(|(matches, _)| matches(line))
        .map(|(_, tone)| *tone)
        .unwrap_or(HealTone::Neutral)
}
