use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Market data store error: {0}")]
    MarketDataError(String),

    #[error("Invalid search parameters: {0}")]
    InvalidParameters(String),

    #[error("Insufficient data: need at least {needed} candles, have {actual}")]
    InsufficientData { needed: usize, actual: usize },

    #[error("Window out of range: segment [{start}, {end}) exceeds series length {len}")]
    WindowOutOfRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error(transparent)]
    AnyhowError(#[from] anyhow::Error),
}
