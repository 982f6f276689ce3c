//! Domain error types.

use chrono::NaiveTime;

/// Top-level error type for stockprofit.
#[derive(Debug, thiserror::Error)]
pub enum ProfitError {
    #[error("insufficient data: have {have} prices, need at least {need}")]
    InsufficientData { have: usize, need: usize },

    #[error("profit from index {buy_index} to {sell_index} is out of numeric range")]
    Overflow { buy_index: usize, sell_index: usize },

    /// `index` is the position of the price as supplied, before any sorting.
    #[error("invalid price at index {index}: {reason}")]
    InvalidPrice { index: usize, reason: String },

    #[error("duplicate price tick at {time}")]
    DuplicateTime { time: NaiveTime },

    #[error("price tick at {time} is before market open {open}")]
    BeforeOpen { time: NaiveTime, open: NaiveTime },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ProfitError> for std::process::ExitCode {
    fn from(err: &ProfitError) -> Self {
        let code: u8 = match err {
            ProfitError::Io(_) => 1,
            ProfitError::ConfigParse { .. }
            | ProfitError::ConfigMissing { .. }
            | ProfitError::ConfigInvalid { .. } => 2,
            ProfitError::Data { .. }
            | ProfitError::Overflow { .. }
            | ProfitError::InvalidPrice { .. }
            | ProfitError::DuplicateTime { .. }
            | ProfitError::BeforeOpen { .. } => 3,
            ProfitError::InsufficientData { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
