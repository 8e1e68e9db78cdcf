use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candle {
    pub symbol: String,
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    Minute1,
    Minute5,
    Minute15,
    Minute30,
    Hour1,
    Day1,
}

impl TimeFrame {
    /// Parses the exchange-style shorthand ("1m", "5m", "15m", "30m", "1h", "1d").
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "1m" => Some(TimeFrame::Minute1),
            "5m" => Some(TimeFrame::Minute5),
            "15m" => Some(TimeFrame::Minute15),
            "30m" => Some(TimeFrame::Minute30),
            "1h" => Some(TimeFrame::Hour1),
            "1d" => Some(TimeFrame::Day1),
            _ => None,
        }
    }
}

/// A historical window accepted into the ranked result, together with the
/// candles needed to overlay it on the current pattern: the matched window
/// plus its forward continuation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternMatch {
    /// Pearson correlation against the current window, in [-1.0, 1.0].
    pub score: f64,
    /// Start of the matched window in the source series.
    pub start_index: usize,
    /// Timestamp of the first bar after the matched window; also the
    /// source of the calendar-day dedup key.
    pub anchor_timestamp: DateTime<Utc>,
    /// The matched window followed by its forward segment
    /// (window + forward candles).
    pub candles: Vec<Candle>,
}

/// Result of one pattern search: the current tail of the series and the
/// ranked, day-deduplicated matches (best first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub symbol: String,
    pub current: Vec<Candle>,
    pub matches: Vec<PatternMatch>,
}
