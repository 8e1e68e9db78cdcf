// Orchestrates the market data store and the pattern search.
use crate::data::csv_parser::OhlcvCsvParser;
use crate::data::market_data::MarketDataStore;
use crate::error::EngineError;
use crate::patterns::search::{find_similar_patterns, SearchParams};
use shared::models::{SearchOutcome, TimeFrame};

pub struct PatternService {
    market_data_store: MarketDataStore,
}

impl PatternService {
    pub fn new() -> Self {
        PatternService {
            market_data_store: MarketDataStore::new(),
        }
    }

    /// Loads an OHLCV CSV file into the store. Returns the number of candles
    /// held for the symbol/timeframe after the load.
    pub fn load_csv(
        &mut self,
        file_path: &str,
        symbol: &str,
        timeframe: TimeFrame,
    ) -> Result<usize, EngineError> {
        tracing::info!(symbol, path = file_path, "Loading candles from CSV");
        let candles = OhlcvCsvParser::load_candles_from_csv(file_path, symbol)
            .map_err(EngineError::AnyhowError)?;
        if candles.is_empty() {
            tracing::warn!(symbol, path = file_path, "CSV file contained no candles");
        }
        self.market_data_store.add_candles(symbol, timeframe, candles);
        let count = self
            .market_data_store
            .get_series(symbol, timeframe)
            .map_or(0, |s| s.len());
        tracing::info!(symbol, ?timeframe, candles = count, "Market data loaded");
        Ok(count)
    }

    /// Runs one similarity search over the stored series for the symbol.
    pub fn find_patterns(
        &self,
        symbol: &str,
        timeframe: TimeFrame,
        params: &SearchParams,
    ) -> Result<SearchOutcome, EngineError> {
        tracing::debug!(
            symbol,
            ?timeframe,
            window = params.window,
            forward = params.forward,
            top_n = params.top_n,
            "Handling pattern search request"
        );

        let series = self
            .market_data_store
            .get_series(symbol, timeframe)
            .ok_or_else(|| {
                tracing::warn!(symbol, ?timeframe, "No candle data found for pattern search");
                EngineError::MarketDataError(format!(
                    "No candle data found for symbol '{}' and timeframe {:?}",
                    symbol, timeframe
                ))
            })?;

        let outcome = find_similar_patterns(series, params)?;
        tracing::info!(
            symbol,
            matches = outcome.matches.len(),
            "Pattern search complete"
        );
        Ok(outcome)
    }
}

impl Default for PatternService {
    fn default() -> Self {
        Self::new()
    }
}
