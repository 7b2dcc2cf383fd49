use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use hustle_cli::app::{self, FieldOverrides};
use hustle_cli::config::Config;
use hustle_cli::report::{self, OutputFormat};
use hustle_cli::{logging, scenarios, session};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Side hustle income estimator.
///
/// Derives weekly, monthly and annual income from hours worked, hourly rate
/// and monthly expenses.
#[derive(Debug, Parser)]
#[command(name = "hustle-estimator", version, about)]
struct Cli {
    /// TOML file with starting values (defaults to ./hustle-estimator.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `hustle_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Compute and print one estimate.
    Estimate(EstimateArgs),

    /// Compute one estimate per row of a CSV file.
    Batch {
        /// CSV file with hours_per_week, hustle_type, hourly_rate, monthly_expenses columns.
        #[arg(short, long)]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Edit fields interactively from stdin.
    Session,

    /// List hustle types and their typical rate ranges.
    Types,
}

// Values are taken as text on purpose: unparseable numbers become 0.
#[derive(Debug, Args)]
struct EstimateArgs {
    /// Hours worked per week (1-80).
    #[arg(long, allow_hyphen_values = true)]
    hours: Option<String>,

    /// Hourly rate in dollars (1-500).
    #[arg(long, allow_hyphen_values = true)]
    rate: Option<String>,

    /// Hustle type tag (see `types`).
    #[arg(long = "type")]
    hustle_type: Option<String>,

    /// Monthly expenses in dollars (0-10000).
    #[arg(long, allow_hyphen_values = true)]
    expenses: Option<String>,

    /// Print only the summary and breakdown.
    #[arg(long)]
    compact: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = Config::load(cli.config.as_deref())?;
    let start = config.starting_input();
    debug!(?start, "starting input");

    match cli.command {
        Command::Estimate(args) => {
            let overrides = FieldOverrides {
                hours_per_week: args.hours,
                hustle_type: args.hustle_type,
                hourly_rate: args.rate,
                monthly_expenses: args.expenses,
            };
            let calc = app::build_calculator(start, &overrides);
            print!("{}", app::estimate_output(&calc, args.compact, args.format)?);
        }
        Command::Batch { file, format } => {
            let calcs = scenarios::load_from_file(&file, &start)
                .with_context(|| format!("Failed to load scenarios: {}", file.display()))?;
            print!("{}", app::batch_output(&calcs, format)?);
        }
        Command::Session => {
            let mut calc = hustle_core::IncomeCalculator::new(start.clone());
            session::run(&mut calc, &start, io::stdin().lock(), io::stdout().lock())
                .context("session I/O failed")?;
        }
        Command::Types => print!("{}", report::render_types()),
    }

    Ok(())
}
