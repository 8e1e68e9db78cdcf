// Pattern similarity search: windowed extraction, correlation scoring,
// and day-deduplicated ranking.
pub mod correlation;
pub mod search;
pub mod window;
