//! Core domain types and logic.

pub mod profit;
pub mod price_series;
pub mod config_validation;
pub mod error;
