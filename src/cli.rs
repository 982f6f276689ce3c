//! CLI definition and dispatch.

use chrono::{Duration, NaiveTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{data_path, market_open, validate_config};
use crate::domain::error::ProfitError;
use crate::domain::price_series::PriceSeries;
use crate::domain::profit::Trade;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(
    name = "stockprofit",
    about = "Best profit from one buy and one later sell"
)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the maximum profit for a price series
    Profit {
        /// Comma-separated prices in chronological order
        #[arg(
            long,
            allow_hyphen_values = true,
            conflicts_with = "code",
            required_unless_present = "code"
        )]
        prices: Option<String>,
        /// Read prices from <data.path>/<CODE>.csv
        #[arg(long, requires = "config")]
        code: Option<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Also print the buy and sell positions
        #[arg(long)]
        trade: bool,
    },
    /// List codes that have a price file
    ListSymbols {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Summarise the price file for a code
    Info {
        #[arg(long)]
        code: String,
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    tracing::info!(command = ?cli.command, "dispatching command");
    let result = match cli.command {
        Command::Profit {
            prices,
            code,
            config,
            trade,
        } => run_profit(prices.as_deref(), code.as_deref(), config.as_ref(), trade),
        Command::ListSymbols { config } => run_list_symbols(&config),
        Command::Info { code, config } => run_info(&code, &config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ProfitError> {
    tracing::info!(path = %path.display(), "loading config");
    let adapter = FileConfigAdapter::from_file(path).map_err(|e| ProfitError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    validate_config(&adapter)?;
    Ok(adapter)
}

/// Parse a comma-separated price list. A blank list is empty, not an error.
pub fn parse_prices(input: &str) -> Result<Vec<f64>, ProfitError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .enumerate()
        .map(|(index, raw)| {
            raw.trim()
                .parse::<f64>()
                .map_err(|e| ProfitError::InvalidPrice {
                    index,
                    reason: format!("'{}': {}", raw.trim(), e),
                })
        })
        .collect()
}

pub fn load_series(
    data: &dyn DataPort,
    code: &str,
    open: NaiveTime,
) -> Result<PriceSeries, ProfitError> {
    let ticks = data.fetch_ticks(code)?;
    PriceSeries::from_ticks(ticks, open)
}

/// Render a trade; with `open`, positions are also shown as time of day.
pub fn format_trade(series: &PriceSeries, trade: &Trade<f64>, open: Option<NaiveTime>) -> String {
    let leg = |label: &str, index: usize| {
        let minute = series.minute_at(index).unwrap_or(index as u32);
        let price = series
            .prices()
            .get(index)
            .map_or_else(|| "?".to_string(), |p| p.to_string());
        match open {
            Some(open) => format!(
                "{label}: index {index} ({}) at {price}",
                clock_time(open, minute).format("%H:%M")
            ),
            None => format!("{label}: index {index} (minute {minute}) at {price}"),
        }
    };
    format!(
        "profit: {}\n{}\n{}",
        trade.profit,
        leg("buy", trade.buy_index),
        leg("sell", trade.sell_index)
    )
}

fn clock_time(open: NaiveTime, minute: u32) -> NaiveTime {
    open + Duration::minutes(i64::from(minute))
}

fn run_profit(
    prices: Option<&str>,
    code: Option<&str>,
    config_path: Option<&PathBuf>,
    show_trade: bool,
) -> Result<(), ProfitError> {
    let (series, open) = match (prices, code, config_path) {
        (Some(list), _, _) => (PriceSeries::new(parse_prices(list)?)?, None),
        (None, Some(code), Some(config_path)) => {
            let config = load_config(config_path)?;
            let open = market_open(&config)?;
            let data = CsvAdapter::new(data_path(&config)?);
            (load_series(&data, code, open)?, Some(open))
        }
        _ => {
            return Err(ProfitError::ConfigMissing {
                section: "cli".to_string(),
                key: "--prices or --code with --config".to_string(),
            });
        }
    };

    tracing::info!(prices = series.len(), "computing max profit");
    if show_trade {
        let trade = series.best_trade()?;
        tracing::info!(
            profit = trade.profit,
            buy_index = trade.buy_index,
            sell_index = trade.sell_index,
            "best trade computed"
        );
        println!("{}", format_trade(&series, &trade, open));
    } else {
        let profit = series.max_profit()?;
        tracing::info!(profit, "max profit computed");
        println!("{profit}");
    }
    Ok(())
}

fn run_list_symbols(config_path: &PathBuf) -> Result<(), ProfitError> {
    let config = load_config(config_path)?;
    let data = CsvAdapter::new(data_path(&config)?);
    for symbol in data.list_symbols()? {
        println!("{symbol}");
    }
    Ok(())
}

fn run_info(code: &str, config_path: &PathBuf) -> Result<(), ProfitError> {
    let config = load_config(config_path)?;
    let open = market_open(&config)?;
    let data = CsvAdapter::new(data_path(&config)?);
    let series = load_series(&data, code, open)?;
    tracing::info!(code, prices = series.len(), "series loaded");
    println!("{}", describe_series(code, &series, open));
    Ok(())
}

pub fn describe_series(code: &str, series: &PriceSeries, open: NaiveTime) -> String {
    let (Some((low, high)), Some(first), Some(last)) = (
        series.price_range(),
        series.minute_at(0),
        series.minute_at(series.len().saturating_sub(1)),
    ) else {
        return format!("{code}: no prices");
    };
    format!(
        "{code}: {} prices, {} to {}, low {low}, high {high}",
        series.len(),
        clock_time(open, first).format("%H:%M"),
        clock_time(open, last).format("%H:%M"),
    )
}
