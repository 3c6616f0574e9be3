pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::{PropertiesKeyStore, RateDate};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// A lookup requested from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Rate of `currency` against the provider's base currency.
    Rate { currency: String, date: RateDate },
    /// Rate of `from` against `to`.
    Cross {
        from: String,
        to: String,
        date: RateDate,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<f64> {
    info!("xrate starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let fixer = &config.providers.fixer;
    let keys = PropertiesKeyStore::new(&fixer.key_store, &fixer.key_name);
    let client = providers::FixerRateClient::new(&fixer.base_url, &keys)
        .context("Failed to set up the rate client")?;

    cli::rate::run(&client, &command).await
}
