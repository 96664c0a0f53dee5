mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::EnvFilter;

use commands::loan::{MonthlyRateArgs, PaymentArgs, ValidateArgs};

/// Loan amortization calculations
#[derive(Parser)]
#[command(
    name = "loancalc",
    version,
    about = "Loan amortization calculations",
    long_about = "A CLI for fixed-rate loan calculations with decimal precision. \
                  Validates principal bounds, converts APR to a monthly rate and \
                  computes the level monthly payment of a fully amortizing loan."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly payment and loan totals
    Payment(PaymentArgs),
    /// Convert an APR percentage to a monthly rate
    MonthlyRate(MonthlyRateArgs),
    /// Check a principal against the origination bounds
    Validate(ValidateArgs),
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

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "loan_calc_core=debug,loancalc=debug"
    } else {
        "loan_calc_core=info,loancalc=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout carries the result; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payment(args) => commands::loan::run_payment(args),
        Commands::MonthlyRate(args) => commands::loan::run_monthly_rate(args),
        Commands::Validate(args) => commands::loan::run_validate(args),
        Commands::Version => {
            println!("loancalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
