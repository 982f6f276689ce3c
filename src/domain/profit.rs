//! Maximum single-trade profit.
//!
//! One buy followed by one strictly later sell, no shorting. A single pass
//! tracks the lowest price seen so far: the best sale at index `i` can only
//! pair with the minimum over `0..i`.

use crate::domain::error::ProfitError;

/// Fewest prices for which a buy/sell pair exists.
pub const MIN_PRICES: usize = 2;

/// A price type whose differences can fall outside its range.
pub trait PriceValue: Copy + PartialOrd {
    /// `self - other`, or `None` when the difference is not representable.
    fn checked_diff(self, other: Self) -> Option<Self>;
}

macro_rules! impl_price_value_int {
    ($($t:ty),*) => {
        $(impl PriceValue for $t {
            fn checked_diff(self, other: Self) -> Option<Self> {
                self.checked_sub(other)
            }
        })*
    };
}

macro_rules! impl_price_value_float {
    ($($t:ty),*) => {
        $(impl PriceValue for $t {
            fn checked_diff(self, other: Self) -> Option<Self> {
                let diff = self - other;
                diff.is_finite().then_some(diff)
            }
        })*
    };
}

impl_price_value_int!(i8, i16, i32, i64, i128, isize);
impl_price_value_float!(f32, f64);

/// The best buy/sell pair in a price sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade<T> {
    pub buy_index: usize,
    pub sell_index: usize,
    pub profit: T,
}

/// Best profit from buying at one index and selling at a later one.
///
/// The result is negative when prices only fall. Fewer than two prices is an
/// error, never a zero profit.
pub fn max_profit<T: PriceValue>(prices: &[T]) -> Result<T, ProfitError> {
    best_trade(prices).map(|trade| trade.profit)
}

/// Like [`max_profit`] but also reports where to buy and sell.
///
/// Ties resolve to the earliest buy and then the earliest sell. A gain too
/// large for `T` is an [`ProfitError::Overflow`]. A loss too large for `T`
/// is skipped, since any representable pair beats it; it is only an error
/// when no pair is representable.
pub fn best_trade<T: PriceValue>(prices: &[T]) -> Result<Trade<T>, ProfitError> {
    if prices.len() < MIN_PRICES {
        return Err(ProfitError::InsufficientData {
            have: prices.len(),
            need: MIN_PRICES,
        });
    }

    let mut min_index = 0;
    let mut best: Option<Trade<T>> = None;
    let mut unrepresentable_loss = None;

    // i == 1 seeds `best` with prices[1] - prices[0].
    for i in 1..prices.len() {
        let (buy, sell) = (prices[min_index], prices[i]);
        match sell.checked_diff(buy) {
            Some(candidate) => {
                if best.is_none_or(|b| candidate > b.profit) {
                    best = Some(Trade {
                        buy_index: min_index,
                        sell_index: i,
                        profit: candidate,
                    });
                }
            }
            None if sell < buy => {
                unrepresentable_loss.get_or_insert((min_index, i));
            }
            None => {
                return Err(ProfitError::Overflow {
                    buy_index: min_index,
                    sell_index: i,
                });
            }
        }
        if sell < buy {
            min_index = i;
        }
    }

    best.ok_or_else(|| {
        let (buy_index, sell_index) = unrepresentable_loss.unwrap_or((0, 1));
        ProfitError::Overflow {
            buy_index,
            sell_index,
        }
    })
}
