//! Configuration validation.
//!
//! Validates config fields before any price data is read.

use crate::domain::error::ProfitError;
use crate::ports::config_port::ConfigPort;
use chrono::NaiveTime;
use std::path::PathBuf;

/// Market open used when `[market] open` is not set.
pub fn default_market_open() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default()
}

/// The configured market open, or [`default_market_open`] when absent.
pub fn market_open(config: &dyn ConfigPort) -> Result<NaiveTime, ProfitError> {
    match config.get_time("market", "open") {
        None => Ok(default_market_open()),
        Some(Ok(time)) => Ok(time),
        Some(Err(raw)) => Err(ProfitError::ConfigInvalid {
            section: "market".to_string(),
            key: "open".to_string(),
            reason: format!("'{}' is not a time of day (expected HH:MM)", raw),
        }),
    }
}

/// The directory holding `<CODE>.csv` price files.
pub fn data_path(config: &dyn ConfigPort) -> Result<PathBuf, ProfitError> {
    match config.get_string("data", "path") {
        None => Err(ProfitError::ConfigMissing {
            section: "data".to_string(),
            key: "path".to_string(),
        }),
        Some(p) if p.trim().is_empty() => Err(ProfitError::ConfigInvalid {
            section: "data".to_string(),
            key: "path".to_string(),
            reason: "path must not be empty".to_string(),
        }),
        Some(p) => Ok(PathBuf::from(p.trim())),
    }
}

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), ProfitError> {
    market_open(config)?;
    data_path(config)?;
    Ok(())
}
