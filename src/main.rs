use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use xrate::core::RateDate;
use xrate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the rate of a currency against the provider's base currency
    Rate {
        /// Currency code, e.g. USD
        currency: String,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<RateDate>,
    },
    /// Show the cross-rate between two currencies
    Cross {
        /// Currency code to convert from
        from: String,
        /// Currency code to convert to
        to: String,
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<RateDate>,
    },
}

impl From<Commands> for xrate::AppCommand {
    fn from(cmd: Commands) -> xrate::AppCommand {
        match cmd {
            Commands::Rate { currency, date } => xrate::AppCommand::Rate {
                currency,
                date: date.unwrap_or_else(RateDate::today),
            },
            Commands::Cross { from, to, date } => xrate::AppCommand::Cross {
                from,
                to,
                date: date.unwrap_or_else(RateDate::today),
            },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => xrate::cli::setup::setup(),
        Some(cmd) => xrate::run_command(cmd.into(), cli.config_path.as_deref())
            .await
            .map(|_| ()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
