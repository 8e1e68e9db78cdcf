// Window extraction over an ordered candle series
use crate::error::EngineError;
use shared::models::Candle;
use std::ops::Range;

/// Returns the most recent `window` candles, the "current" pattern.
pub fn current_window(series: &[Candle], window: usize) -> Result<&[Candle], EngineError> {
    if series.len() < window {
        return Err(EngineError::InsufficientData {
            needed: window,
            actual: series.len(),
        });
    }
    Ok(&series[series.len() - window..])
}

/// Returns the `window + forward` candles starting at `start`: the candidate
/// window followed by its forward continuation.
pub fn candidate_segment(
    series: &[Candle],
    start: usize,
    window: usize,
    forward: usize,
) -> Result<&[Candle], EngineError> {
    let end = start + window + forward;
    if end > series.len() {
        return Err(EngineError::WindowOutOfRange {
            start,
            end,
            len: series.len(),
        });
    }
    Ok(&series[start..end])
}

/// Every start index that leaves room for a full window plus forward segment.
/// The tail window itself falls outside this range and is never a candidate.
pub fn eligible_starts(series_len: usize, window: usize, forward: usize) -> Range<usize> {
    0..series_len.saturating_sub(window + forward)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn make_series(closes: &[f64]) -> Vec<Candle> {
        let base = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Candle {
                symbol: "TEST".to_string(),
                timestamp: base + Duration::minutes(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_current_window_takes_tail() {
        let series = make_series(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let current = current_window(&series, 3).unwrap();
        assert_eq!(current.len(), 3);
        assert_eq!(current[0].close, 3.0);
        assert_eq!(current[2].close, 5.0);
    }

    #[test]
    fn test_current_window_insufficient_data() {
        let series = make_series(&[1.0, 2.0]);
        let result = current_window(&series, 3);
        assert!(matches!(
            result,
            Err(EngineError::InsufficientData {
                needed: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_candidate_segment_bounds() {
        let series = make_series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let segment = candidate_segment(&series, 1, 3, 2).unwrap();
        assert_eq!(segment.len(), 5);
        assert_eq!(segment[0].close, 2.0);

        let result = candidate_segment(&series, 2, 3, 2);
        assert!(matches!(result, Err(EngineError::WindowOutOfRange { .. })));
    }

    #[test]
    fn test_eligible_starts_excludes_tail() {
        // len 10, window 3, forward 2: starts 0..5; start 5 would be the
        // segment ending exactly at the tail and is excluded.
        assert_eq!(eligible_starts(10, 3, 2), 0..5);
        // No room for any candidate
        assert_eq!(eligible_starts(5, 3, 2), 0..0);
        assert_eq!(eligible_starts(4, 3, 2), 0..0);
    }
}
