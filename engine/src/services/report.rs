// Text rendering of a search outcome, one line per match.
use shared::models::SearchOutcome;
use shared::utils::{format_day, format_percent, format_score};

/// Renders the outcome as a plain-text report. `window` is the pattern
/// length used in the search; it marks where each match's forward segment
/// begins.
pub fn render(outcome: &SearchOutcome, window: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} pattern analysis\n", outcome.symbol));

    match outcome.current.last() {
        Some(last) => out.push_str(&format!(
            "CURRENT   {} bars, last close {:.2} at {}\n",
            outcome.current.len(),
            last.close,
            last.timestamp.format("%Y-%m-%d %H:%M"),
        )),
        None => out.push_str("CURRENT   (empty series)\n"),
    }

    if outcome.matches.is_empty() {
        out.push_str("No similar patterns found.\n");
        return out;
    }

    for (i, m) in outcome.matches.iter().enumerate() {
        let forward_move = forward_move_percent(&m.candles, window)
            .map(format_percent)
            .unwrap_or_else(|| "n/a".to_string());
        out.push_str(&format!(
            "PATTERN {} ({})  corr {}  forward {}\n",
            i + 1,
            format_day(m.anchor_timestamp),
            format_score(m.score),
            forward_move,
        ));
    }
    out
}

/// Percentage move over the forward segment: last forward close against the
/// final close of the matched window. None when there is no forward segment.
fn forward_move_percent(candles: &[shared::models::Candle], window: usize) -> Option<f64> {
    if window == 0 || candles.len() <= window {
        return None;
    }
    let window_end = candles[window - 1].close;
    let forward_end = candles.last()?.close;
    if window_end == 0.0 {
        return None;
    }
    Some((forward_end - window_end) / window_end * 100.0)
}
