mod commands;
mod input;
mod output;
mod telemetry;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::underwriting::{DecideArgs, ValidateArgs};

/// Deterministic loan underwriting decisions
#[derive(Parser)]
#[command(
    name = "underwrite",
    version,
    about = "Deterministic loan underwriting decisions",
    long_about = "Prices a loan request against the applicant's risk profile, caps the \
                  approvable principal, computes the flat-interest annual payment and \
                  returns an approve/deny verdict with every applicable denial reason. \
                  Amounts are in millions; periods in years."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Log filter used when RUST_LOG is not set (e.g. "warn", "debug")
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full underwriting decision for one application
    Decide(DecideArgs),
    /// Validate an application without deciding it
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

fn main() {
    let cli = Cli::parse();

    let verbose = matches!(&cli.command, Commands::Decide(args) if args.verbose);
    if let Err(e) = telemetry::init(&cli.log_level, verbose) {
        eprintln!("{}: {}", "error".red().bold(), e);
        process::exit(1);
    }

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Decide(args) => commands::underwriting::run_decide(args),
        Commands::Validate(args) => commands::underwriting::run_validate(args),
        Commands::Version => {
            println!("underwrite {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result.and_then(|value| output::format_output(&cli.output, &value)) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
