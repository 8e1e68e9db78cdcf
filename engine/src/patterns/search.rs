// Similarity search: score every eligible historical window against the
// current pattern, rank by correlation, and keep at most one match per
// calendar day.
use crate::error::EngineError;
use crate::patterns::correlation::pearson;
use crate::patterns::window;
use chrono::{DateTime, NaiveDate, Utc};
use shared::models::{Candle, PatternMatch, SearchOutcome};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Length of the pattern window, in candles. Must be positive.
    pub window: usize,
    /// Length of the forward continuation attached to each match.
    pub forward: usize,
    /// Maximum number of distinct-day matches to return.
    pub top_n: usize,
}

impl SearchParams {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.window == 0 {
            return Err(EngineError::InvalidParameters(
                "window must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// A scored historical window, not yet selected into the result.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    score: f64,
    start_index: usize,
    anchor_timestamp: DateTime<Utc>,
}

impl Candidate {
    /// Dedup key: the UTC calendar date of the bar right after the window.
    fn day(&self) -> NaiveDate {
        self.anchor_timestamp.date_naive()
    }
}

/// Finds the historical windows most correlated with the current pattern.
///
/// The current pattern is the last `window` closes of `series`. Every start
/// index leaving room for a window plus forward segment is scored; candidates
/// with undefined correlation (constant window) are dropped. Survivors are
/// ordered by score descending, ties broken by the smaller start index, and
/// selected greedily with at most one match per UTC calendar day until
/// `top_n` matches are collected.
///
/// Returns an empty match list (not an error) when no candidate survives or
/// `top_n` is 0. Errors: `InvalidParameters` for a zero window,
/// `InsufficientData` when the series cannot hold the current pattern and
/// its forward tail.
pub fn find_similar_patterns(
    series: &[Candle],
    params: &SearchParams,
) -> Result<SearchOutcome, EngineError> {
    params.validate()?;

    let tail_len = params.window + params.forward;
    if series.len() < tail_len {
        return Err(EngineError::InsufficientData {
            needed: tail_len,
            actual: series.len(),
        });
    }

    let current = window::current_window(series, params.window)?;
    let current_closes: Vec<f64> = current.iter().map(|c| c.close).collect();

    let mut candidates = Vec::new();
    for start in window::eligible_starts(series.len(), params.window, params.forward) {
        let past_closes: Vec<f64> = series[start..start + params.window]
            .iter()
            .map(|c| c.close)
            .collect();
        if let Some(score) = pearson(&current_closes, &past_closes) {
            candidates.push(Candidate {
                score,
                start_index: start,
                anchor_timestamp: series[start + params.window].timestamp,
            });
        }
    }

    // Deterministic order: best score first, earliest start wins ties. No
    // NaN scores survive scoring, so total_cmp imposes a plain numeric order.
    candidates.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.start_index.cmp(&b.start_index))
    });

    let mut picked_days: HashSet<NaiveDate> = HashSet::new();
    let mut matches = Vec::new();
    for candidate in &candidates {
        if matches.len() >= params.top_n {
            break;
        }
        if !picked_days.insert(candidate.day()) {
            continue;
        }
        let segment = window::candidate_segment(
            series,
            candidate.start_index,
            params.window,
            params.forward,
        )?;
        matches.push(PatternMatch {
            score: candidate.score,
            start_index: candidate.start_index,
            anchor_timestamp: candidate.anchor_timestamp,
            candles: segment.to_vec(),
        });
    }

    let symbol = series
        .first()
        .map(|c| c.symbol.clone())
        .unwrap_or_default();
    Ok(SearchOutcome {
        symbol,
        // The overlay tail: current window plus the bars already seen after
        // it, mirroring what a renderer draws against each match segment.
        current: series[series.len() - tail_len..].to_vec(),
        matches,
    })
}
