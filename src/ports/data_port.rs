//! Price data access port trait.

use crate::domain::error::ProfitError;
use crate::domain::price_series::PriceTick;

pub trait DataPort {
    /// All ticks recorded for `code`, in the order the source holds them.
    fn fetch_ticks(&self, code: &str) -> Result<Vec<PriceTick>, ProfitError>;

    fn list_symbols(&self) -> Result<Vec<String>, ProfitError>;
}
