// Formatting helpers shared between the engine and any front end.

use chrono::{DateTime, Utc};

/// Formats a correlation score with four decimals, e.g. "0.9871".
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Formats a timestamp as its UTC calendar date, e.g. "2024-12-30".
pub fn format_day(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

/// Formats a signed percentage move, e.g. "+1.25%".
pub fn format_percent(pct: f64) -> String {
    format!("{:+.2}%", pct)
}
