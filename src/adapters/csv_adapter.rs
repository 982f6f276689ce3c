//! CSV file price adapter.
//!
//! One file per code, `<base>/<CODE>.csv`, with a header row and
//! `time,price` columns.

use crate::domain::error::ProfitError;
use crate::domain::price_series::PriceTick;
use crate::ports::config_port::parse_time;
use crate::ports::data_port::DataPort;
use std::fs;
use std::path::PathBuf;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, code: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", code))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_ticks(&self, code: &str) -> Result<Vec<PriceTick>, ProfitError> {
        let path = self.csv_path(code);
        tracing::debug!(path = %path.display(), "reading price file");
        let content = fs::read_to_string(&path).map_err(|e| ProfitError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut ticks = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| ProfitError::Data {
                reason: format!("CSV parse error: {}", e),
            })?;

            let time_str = record.get(0).ok_or_else(|| ProfitError::Data {
                reason: format!("row {}: missing time column", row + 1),
            })?;
            let time = parse_time(time_str).ok_or_else(|| ProfitError::Data {
                reason: format!("row {}: invalid time '{}'", row + 1, time_str),
            })?;

            let price: f64 = record
                .get(1)
                .ok_or_else(|| ProfitError::Data {
                    reason: format!("row {}: missing price column", row + 1),
                })?
                .parse()
                .map_err(|e| ProfitError::InvalidPrice {
                    index: row,
                    reason: format!("{}", e),
                })?;

            ticks.push(PriceTick { time, price });
        }

        tracing::debug!(code, rows = ticks.len(), "parsed price file");
        Ok(ticks)
    }

    fn list_symbols(&self) -> Result<Vec<String>, ProfitError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| ProfitError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut symbols = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| ProfitError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(code) = name_str.strip_suffix(".csv") {
                if !code.is_empty() {
                    symbols.push(code.to_string());
                }
            }
        }

        symbols.sort();
        Ok(symbols)
    }
}
