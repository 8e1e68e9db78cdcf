// Manages market data, keyed by symbol and timeframe
use shared::models::{Candle, TimeFrame};
use std::collections::HashMap;

pub struct MarketDataStore {
    data: HashMap<String, HashMap<TimeFrame, Vec<Candle>>>,
}

impl MarketDataStore {
    pub fn new() -> Self {
        MarketDataStore {
            data: HashMap::new(),
        }
    }

    /// Inserts candles for a symbol/timeframe. The stored series is kept
    /// sorted by timestamp with duplicate timestamps collapsed, which is the
    /// ordering invariant the pattern search relies on.
    pub fn add_candles(&mut self, symbol: &str, timeframe: TimeFrame, new_candles: Vec<Candle>) {
        let symbol_data = self.data.entry(symbol.to_string()).or_default();
        let timeframe_data = symbol_data.entry(timeframe).or_default();

        timeframe_data.extend(new_candles);
        timeframe_data.sort_by_key(|c| c.timestamp);
        timeframe_data.dedup_by_key(|c| c.timestamp);
    }

    /// Returns the full ordered series for a symbol/timeframe, if present.
    pub fn get_series(&self, symbol: &str, timeframe: TimeFrame) -> Option<&[Candle]> {
        self.data
            .get(symbol)
            .and_then(|symbol_data| symbol_data.get(&timeframe))
            .map(|candles| candles.as_slice())
    }
}

impl Default for MarketDataStore {
    fn default() -> Self {
        Self::new()
    }
}
