//! RaceRank - Application Entry Point
//!
//! Reads the timing log and participant directory, prints the ranked
//! leaderboard to stdout and exits with a per-error-kind code on failure.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use racerank::{
    AppError, AppResult, RaceService,
    config::{Config, Locale, LogFormat, LoggingConfig, OutputFormat},
    models::ElapsedPolicy,
};

#[derive(Parser)]
#[command(name = "racerank", version, about = "Rank race results by elapsed time")]
struct Cli {
    /// Timing log, one `<bib> <separator> <HH:MM:SS,ffffff>` line per event
    #[arg(long)]
    results: Option<PathBuf>,

    /// JSON participant directory keyed by bib number
    #[arg(long)]
    competitors: Option<PathBuf>,

    /// Header language: "en" or "ru"
    #[arg(long)]
    locale: Option<String>,

    /// Output JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Fail when a finish time precedes its start time
    #[arg(long)]
    reject_negative: bool,
}

/// Load env configuration, then let command-line flags override it
fn load_config(cli: Cli) -> AppResult<Config> {
    let mut config = Config::from_env()?;

    if let Some(path) = cli.results {
        config.race.results_path = path;
    }
    if let Some(path) = cli.competitors {
        config.race.competitors_path = path;
    }
    if let Some(locale) = cli.locale {
        config.report.locale = locale.parse::<Locale>()?;
    }
    if cli.json {
        config.report.format = OutputFormat::Json;
    }
    if cli.reject_negative {
        config.race.elapsed_policy = ElapsedPolicy::Reject;
    }

    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.rust_log.clone().into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries the report only
    match logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn fail(err: &AppError) -> ExitCode {
    eprintln!("Error: {err}");
    ExitCode::from(err.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli) {
        Ok(config) => config,
        Err(e) => return fail(&e),
    };

    init_tracing(&config.logging);

    tracing::info!(
        results = %config.race.results_path.display(),
        competitors = %config.race.competitors_path.display(),
        "Starting race ranking..."
    );

    match RaceService::run(&config, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.error_code(), "{e}");
            fail(&e)
        }
    }
}
