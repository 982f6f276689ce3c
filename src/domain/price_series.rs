//! Intraday price series indexed by minutes past market open.

use chrono::{NaiveTime, Timelike};

use crate::domain::error::ProfitError;
use crate::domain::profit::{self, Trade};

/// One observed price at a time of day.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTick {
    pub time: NaiveTime,
    pub price: f64,
}

/// Chronological, immutable prices. Index 0 is the earliest price.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
    minutes: Vec<u32>,
}

impl PriceSeries {
    /// Build a series from bare prices, one per minute from the open.
    pub fn new(prices: Vec<f64>) -> Result<Self, ProfitError> {
        check_finite(&prices)?;
        let minutes = (0..prices.len() as u32).collect();
        Ok(Self { prices, minutes })
    }

    /// Build a series from timestamped ticks, ordering them by time.
    ///
    /// An [`ProfitError::InvalidPrice`] index refers to `ticks` as passed in.
    pub fn from_ticks(mut ticks: Vec<PriceTick>, open: NaiveTime) -> Result<Self, ProfitError> {
        let supplied: Vec<f64> = ticks.iter().map(|t| t.price).collect();
        check_finite(&supplied)?;

        ticks.sort_by_key(|t| t.time);

        for pair in ticks.windows(2) {
            if pair[0].time == pair[1].time {
                return Err(ProfitError::DuplicateTime { time: pair[1].time });
            }
        }
        if let Some(first) = ticks.first() {
            if first.time < open {
                return Err(ProfitError::BeforeOpen {
                    time: first.time,
                    open,
                });
            }
        }

        let prices = ticks.iter().map(|t| t.price).collect();
        let minutes = ticks
            .iter()
            .map(|t| minutes_between(open, t.time))
            .collect();

        Ok(Self { prices, minutes })
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Minutes past open for the price at `index`.
    pub fn minute_at(&self, index: usize) -> Option<u32> {
        self.minutes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// (min, max) price, or `None` for an empty series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let first = *self.prices.first()?;
        Some(
            self.prices
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }

    pub fn max_profit(&self) -> Result<f64, ProfitError> {
        profit::max_profit(&self.prices)
    }

    pub fn best_trade(&self) -> Result<Trade<f64>, ProfitError> {
        profit::best_trade(&self.prices)
    }
}

fn check_finite(prices: &[f64]) -> Result<(), ProfitError> {
    match prices.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(ProfitError::InvalidPrice {
            index,
            reason: format!("{} is not a finite number", prices[index]),
        }),
        None => Ok(()),
    }
}

fn minutes_between(open: NaiveTime, time: NaiveTime) -> u32 {
    (time.num_seconds_from_midnight() - open.num_seconds_from_midnight()) / 60
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn tick(h: u32, m: u32, price: f64) -> PriceTick {
        PriceTick {
            time: hm(h, m),
            price,
        }
    }

    #[test]
    fn new_indexes_by_position() {
        let series = PriceSeries::new(vec![1.0, 5.0, 3.0]).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.minute_at(0), Some(0));
        assert_eq!(series.minute_at(2), Some(2));
        assert_eq!(series.minute_at(3), None);
    }

    #[test]
    fn new_rejects_nan() {
        let err = PriceSeries::new(vec![1.0, f64::NAN, 3.0]).unwrap_err();
        assert!(matches!(err, ProfitError::InvalidPrice { index: 1, .. }));
    }

    #[test]
    fn new_rejects_infinity() {
        let err = PriceSeries::new(vec![f64::INFINITY, 1.0]).unwrap_err();
        assert!(matches!(err, ProfitError::InvalidPrice { index: 0, .. }));
    }

    #[test]
    fn from_ticks_sorts_and_offsets() {
        // $500 at 10:30 with a 09:30 open is minute 60.
        let ticks = vec![tick(10, 30, 500.0), tick(9, 30, 480.0), tick(9, 45, 490.0)];
        let series = PriceSeries::from_ticks(ticks, hm(9, 30)).unwrap();

        assert_eq!(series.prices(), &[480.0, 490.0, 500.0]);
        assert_eq!(series.minute_at(0), Some(0));
        assert_eq!(series.minute_at(1), Some(15));
        assert_eq!(series.minute_at(2), Some(60));
    }

    #[test]
    fn from_ticks_rejects_duplicates() {
        let ticks = vec![tick(9, 30, 1.0), tick(9, 31, 2.0), tick(9, 31, 3.0)];
        let err = PriceSeries::from_ticks(ticks, hm(9, 30)).unwrap_err();
        assert!(matches!(err, ProfitError::DuplicateTime { time } if time == hm(9, 31)));
    }

    #[test]
    fn from_ticks_rejects_before_open() {
        let ticks = vec![tick(9, 29, 1.0), tick(9, 31, 2.0)];
        let err = PriceSeries::from_ticks(ticks, hm(9, 30)).unwrap_err();
        assert!(matches!(err, ProfitError::BeforeOpen { .. }));
    }

    #[test]
    fn from_ticks_empty_is_ok_but_has_no_profit() {
        let series = PriceSeries::from_ticks(vec![], hm(9, 30)).unwrap();
        assert!(series.is_empty());
        assert!(series.price_range().is_none());
        assert!(matches!(
            series.max_profit(),
            Err(ProfitError::InsufficientData { have: 0, .. })
        ));
    }

    #[test]
    fn from_ticks_invalid_price_index_is_input_position() {
        // Sorting would move the NaN tick to position 1.
        let ticks = vec![tick(10, 0, f64::NAN), tick(9, 30, 1.0)];
        let err = PriceSeries::from_ticks(ticks, hm(9, 30)).unwrap_err();
        assert!(matches!(err, ProfitError::InvalidPrice { index: 0, .. }));
    }

    #[test]
    fn finite_prices_with_infinite_profit_are_rejected() {
        let series = PriceSeries::new(vec![-1e308, 1e308]).unwrap();
        assert!(matches!(
            series.max_profit(),
            Err(ProfitError::Overflow {
                buy_index: 0,
                sell_index: 1
            })
        ));
        assert!(matches!(
            series.best_trade(),
            Err(ProfitError::Overflow { .. })
        ));
    }

    #[test]
    fn price_range_spans_min_and_max() {
        let series = PriceSeries::new(vec![7.0, 2.0, 8.0, 9.0]).unwrap();
        assert_eq!(series.price_range(), Some((2.0, 9.0)));
    }

    #[test]
    fn series_delegates_to_profit() {
        let series = PriceSeries::new(vec![7.0, 2.0, 8.0, 9.0]).unwrap();
        assert_relative_eq!(series.max_profit().unwrap(), 7.0);
        let trade = series.best_trade().unwrap();
        assert_eq!((trade.buy_index, trade.sell_index), (1, 3));
    }
}
