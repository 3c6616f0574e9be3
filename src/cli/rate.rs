use crate::AppCommand;
use crate::core::ExchangeRateProvider;
use anyhow::{Context, Result};
use tracing::info;

/// Performs the lookup named by `command` and prints the result.
pub async fn run(provider: &dyn ExchangeRateProvider, command: &AppCommand) -> Result<f64> {
    let rate = match command {
        AppCommand::Rate { currency, date } => provider
            .exchange_rate(currency, *date)
            .await
            .with_context(|| format!("Failed to get {currency} rate for {date}"))?,
        AppCommand::Cross { from, to, date } => provider
            .cross_rate(from, to, *date)
            .await
            .with_context(|| format!("Failed to get {from}/{to} rate for {date}"))?,
    };

    info!(rate, "Lookup complete");
    println!("{}", describe(command, rate));
    Ok(rate)
}

pub fn describe(command: &AppCommand, rate: f64) -> String {
    match command {
        AppCommand::Rate { currency, date } => format!("{date} {currency}: {rate}"),
        AppCommand::Cross { from, to, date } => format!("{date} {from}/{to}: {rate}"),
    }
}
