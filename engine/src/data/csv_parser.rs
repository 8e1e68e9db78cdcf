use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use shared::models::Candle;
use std::fs::File;
use std::io::BufReader;

pub struct OhlcvCsvParser;

impl OhlcvCsvParser {
    // CSV Header: timestamp,open,high,low,close,volume
    // Example Row: 1735582800000,93512.1,93588.0,93401.2,93455.7,182.431
    // Timestamps are unix epoch milliseconds, the shape an exchange OHLCV
    // dump produces.
    pub fn load_candles_from_csv(file_path: &str, symbol: &str) -> Result<Vec<Candle>> {
        let file = File::open(file_path)
            .map_err(|e| anyhow!("Failed to open CSV file '{}': {}", file_path, e))?;
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();

        let mut candles = Vec::new();
        for (idx, result) in rdr.records().enumerate() {
            let record =
                result.map_err(|e| anyhow!("Error reading CSV record at line {}: {}", idx + 2, e))?;

            let ts_str = Self::get_field(&record, &headers, "timestamp")
                .ok_or_else(|| anyhow!("Missing 'timestamp' field at line {}", idx + 2))?;
            let open = Self::parse_price(&record, &headers, "open", idx)?;
            let high = Self::parse_price(&record, &headers, "high", idx)?;
            let low = Self::parse_price(&record, &headers, "low", idx)?;
            let close = Self::parse_price(&record, &headers, "close", idx)?;
            let volume = Self::parse_price(&record, &headers, "volume", idx)?;

            let timestamp = Self::parse_timestamp(ts_str)
                .map_err(|e| anyhow!("Error parsing 'timestamp' at line {}: {}", idx + 2, e))?;

            candles.push(Candle {
                symbol: symbol.to_string(),
                timestamp,
                open,
                high,
                low,
                close,
                volume,
            });
        }
        Ok(candles)
    }

    fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
        let millis = s
            .trim()
            .parse::<i64>()
            .map_err(|e| anyhow!("Not an epoch-millisecond value '{}': {}", s, e))?;
        DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| anyhow!("Timestamp out of range: {}", millis))
    }

    fn parse_price(
        record: &StringRecord,
        headers: &StringRecord,
        name: &str,
        idx: usize,
    ) -> Result<f64> {
        let raw = Self::get_field(record, headers, name)
            .ok_or_else(|| anyhow!("Missing '{}' field at line {}", name, idx + 2))?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| anyhow!("Error parsing '{}' at line {}: {}", name, idx + 2, e))
    }

    // Field lookup by header name, robust to column reordering.
    fn get_field<'a>(
        record: &'a StringRecord,
        headers: &StringRecord,
        name: &str,
    ) -> Option<&'a str> {
        headers
            .iter()
            .position(|header| header == name)
            .and_then(|pos| record.get(pos))
    }
}
