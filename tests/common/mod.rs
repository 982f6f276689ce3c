#![allow(dead_code)]

use chrono::NaiveTime;
use stockprofit::domain::error::ProfitError;
pub use stockprofit::domain::price_series::PriceTick;
use stockprofit::ports::data_port::DataPort;
use std::collections::HashMap;

pub struct MockDataPort {
    pub data: HashMap<String, Vec<PriceTick>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_ticks(mut self, code: &str, ticks: Vec<PriceTick>) -> Self {
        self.data.insert(code.to_string(), ticks);
        self
    }

    pub fn with_error(mut self, code: &str, reason: &str) -> Self {
        self.errors.insert(code.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_ticks(&self, code: &str) -> Result<Vec<PriceTick>, ProfitError> {
        if let Some(reason) = self.errors.get(code) {
            return Err(ProfitError::Data {
                reason: reason.clone(),
            });
        }
        Ok(self.data.get(code).cloned().unwrap_or_default())
    }

    fn list_symbols(&self) -> Result<Vec<String>, ProfitError> {
        let mut symbols: Vec<String> = self.data.keys().cloned().collect();
        symbols.sort();
        Ok(symbols)
    }
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn make_tick(time: &str, price: f64) -> PriceTick {
    PriceTick {
        time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
        price,
    }
}

/// Every buy/sell pair checked; the reference answer.
pub fn brute_force_max_profit(prices: &[i64]) -> Option<i64> {
    let mut best = None;
    for buy in 0..prices.len() {
        for sell in buy + 1..prices.len() {
            let profit = prices[sell] - prices[buy];
            best = Some(best.map_or(profit, |b: i64| b.max(profit)));
        }
    }
    best
}
