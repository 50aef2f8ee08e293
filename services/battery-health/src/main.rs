//! Battery Health CLI
//!
//! Command-line client for the battery health prediction service.

use std::path::PathBuf;

use battery_core::poller::OFFLINE_INSTRUCTIONS;
use battery_core::{ApiStatus, RawFields, ResultView};
use battery_health::{load_config, Config};
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "battery-health")]
#[command(about = "Battery health analyzer client")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Prediction service URL (overrides config file)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: Level,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate readings and request a health prediction
    Predict {
        /// Terminal voltage in volts
        #[arg(long, allow_hyphen_values = true)]
        voltage: String,

        /// Current draw in amps
        #[arg(long, allow_hyphen_values = true)]
        current: String,

        /// Temperature in °C
        #[arg(long, allow_hyphen_values = true)]
        temperature: String,

        /// Battery age in whole months
        #[arg(long, allow_hyphen_values = true)]
        age_months: String,

        /// Internal resistance in ohms
        #[arg(long, allow_hyphen_values = true)]
        resistance: String,
    },
    /// Check whether the prediction service is reachable
    Status,
    /// Read readings from stdin, one submission per line, while polling status
    Watch,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, base_url={:?}, log_level={:?}",
        args.config,
        args.base_url,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    tracing::debug!("Prediction service at {}", config.api.base_url);

    match args.command {
        Command::Predict {
            voltage,
            current,
            temperature,
            age_months,
            resistance,
        } => {
            let fields = RawFields::new(voltage, current, temperature, age_months, resistance);
            let view = battery_health::predict(config, fields).await?;
            if matches!(view, ResultView::Error(_)) {
                std::process::exit(1);
            }
        }
        Command::Status => {
            if battery_health::status(config).await? == ApiStatus::Offline {
                println!("{}", OFFLINE_INSTRUCTIONS);
                std::process::exit(1);
            }
        }
        Command::Watch => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            battery_health::watch(config, stdin).await?;
        }
    }

    Ok(())
}
