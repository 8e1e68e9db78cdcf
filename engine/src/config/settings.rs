// Engine settings, loadable from a JSON config file
use crate::error::EngineError;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize, Clone)]
pub struct SearchSettings {
    /// Path to the OHLCV CSV file holding the series.
    pub csv_path: String,
    pub symbol: String,
    /// Exchange-style timeframe shorthand, e.g. "1m" or "1h".
    pub timeframe: String,
    /// Length of the pattern window, in candles.
    pub window: usize,
    /// Length of the forward continuation to report, in candles.
    pub forward: usize,
    /// Maximum number of distinct-day matches to return.
    pub top_n: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            csv_path: "data/candles.csv".to_string(),
            symbol: "BTC/USDT".to_string(),
            timeframe: "1m".to_string(),
            window: 150,
            forward: 60,
            top_n: 5,
        }
    }
}

impl SearchSettings {
    pub fn load_from_file(path: &str) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::ConfigError(format!("Failed to read settings file '{}': {}", path, e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            EngineError::ConfigError(format!("Failed to parse settings file '{}': {}", path, e))
        })
    }
}
