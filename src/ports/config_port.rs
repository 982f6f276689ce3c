//! Configuration access port trait.

use chrono::NaiveTime;

/// Time-of-day formats accepted in config values.
pub const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// `Some(Err(raw))` when the key is present but not a valid `HH:MM[:SS]`.
    fn get_time(&self, section: &str, key: &str) -> Option<Result<NaiveTime, String>> {
        let raw = self.get_string(section, key)?;
        Some(parse_time(&raw).ok_or(raw))
    }
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
}
