//! # toolrent
//!
//! Command-line front end for pricing tool rentals.
//!
//! ## Module Organization
//! ```text
//! toolrent/
//! ├── main.rs      ◄─── You are here (args, logging, dispatch)
//! ├── config.rs    ◄─── toolrent.toml + environment overrides
//! └── commands.rs  ◄─── checkout / tools / holidays output
//! ```
//!
//! ## Usage
//! ```bash
//! toolrent checkout --tool LADW --days 3 --discount 10 --date 07/02/20
//! toolrent checkout --tool JAKR --days 9 --date 2015-07-02 --format json
//! toolrent tools
//! toolrent holidays --year 2021
//! ```
//!
//! ## Exit Codes
//! - `0` agreement printed
//! - `1` configuration or I/O failure
//! - `2` invalid checkout parameter (message on stderr)

mod commands;
mod config;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use toolrent_core::RentalService;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, OutputFormat};

/// Price short-term tool rentals.
#[derive(Parser, Debug)]
#[command(name = "toolrent", version, about)]
struct Cli {
    /// Configuration file (defaults to $TOOLRENT_CONFIG or the platform config dir).
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check out a tool and print the rental agreement.
    Checkout {
        /// Tool code (case-insensitive), e.g. LADW.
        #[arg(short, long)]
        tool: String,

        /// Number of rental days (at least 1).
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        days: i64,

        /// Discount percent (0-100).
        #[arg(short = 'p', long, default_value_t = 0, allow_negative_numbers = true)]
        discount: i64,

        /// Checkout date, YYYY-MM-DD or MM/DD/YY.
        #[arg(short, long, value_parser = commands::parse_date)]
        date: NaiveDate,

        /// Output format (overrides config).
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Also list every chargeable date.
        #[arg(long)]
        show_days: bool,
    },

    /// List the tool catalog.
    Tools,

    /// List observed holidays for a year.
    Holidays {
        #[arg(short, long)]
        year: i32,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config).context("Failed to load configuration")?;
    let service = RentalService::new(config.catalog()?);
    debug!(tools = service.catalog().len(), "Rental service ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Checkout {
            tool,
            days,
            discount,
            date,
            format,
            show_days,
        } => {
            let mut settings = config.output.clone();
            if let Some(format) = format {
                settings.format = format;
            }
            settings.show_chargeable_days |= show_days;

            let result = service.checkout(&tool, days, discount, date);
            let status =
                commands::report_checkout(&mut out, &mut io::stderr(), result, &settings)?;
            out.flush()?;
            return Ok(ExitCode::from(status));
        }
        Command::Tools => commands::list_tools(&mut out, &service)?,
        Command::Holidays { year } => commands::list_holidays(&mut out, year)?,
    }

    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=toolrent_core=trace` - Trace the billing engine only
/// - Default: WARN only, so a normal run prints nothing but the agreement
///
/// Logs go to stderr so stdout carries only the agreement.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
