pub mod pattern_service;
pub mod report;
