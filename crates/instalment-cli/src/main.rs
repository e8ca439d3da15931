mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::calendar::CalendarDateArgs;
use commands::facility::FacilityArgs;

/// Fixed-rate instalment schedules
#[derive(Parser)]
#[command(
    name = "instalment",
    version,
    about = "Fixed-rate instalment schedules",
    long_about = "Computes level-payment instalment schedules with decimal precision. \
                  Profit is accrued on the actual length of each due month in the \
                  selected calendar (Persian by default), with an optional \
                  ceiling-to-100 rounding variant."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log computation steps to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an instalment schedule without rounding
    FacilityInfo(FacilityArgs),
    /// Build an instalment schedule rounded up to multiples of 100
    FacilityInfoRounded(FacilityArgs),
    /// Convert a Gregorian date into the selected calendar
    CalendarDate(CalendarDateArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::FacilityInfo(args) => commands::facility::run_facility_info(args),
        Commands::FacilityInfoRounded(args) => commands::facility::run_facility_info_rounded(args),
        Commands::CalendarDate(args) => commands::calendar::run_calendar_date(args),
        Commands::Version => {
            println!("instalment {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
