//! Command-line front end for area checks.
//!
//! # Responsibility
//! - Act as the input source (form or canvas submission) and history display.
//! - Resolve configuration from flags, then environment, then defaults.

use anyhow::{Context, Result};
use areacheck_core::db::open_db;
use areacheck_core::{
    core_version, current_clock_text, init_logging, AppConfig, AreaCheckService,
    CalculationResult, CheckError, PointInput, SqliteResultRepository, SubmissionMode, R_OPTIONS,
    X_OPTIONS,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "areacheck", version, about = "Check points against the target area")]
struct Cli {
    /// SQLite file holding the result history
    #[arg(long, global = true)]
    db_path: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// One of trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a point through the form rules (discrete X)
    Form(PointArgs),
    /// Submit a point through the canvas rules (continuous X)
    Canvas(PointArgs),
    /// Print stored results, newest first
    History(HistoryArgs),
    /// Delete every stored result
    Clear,
    /// Print the allowed X and R values
    Options,
    /// Print the current local time
    Clock,
}

#[derive(Args, Debug)]
struct PointArgs {
    #[arg(long, allow_hyphen_values = true)]
    x: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    y: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    r: Option<f64>,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// Print the history as a JSON array for graph rendering
    #[arg(long)]
    json: bool,
}

impl PointArgs {
    fn to_input(&self) -> PointInput {
        PointInput::new(self.x, self.y, self.r)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = resolve_config(&cli);

    // Logging is best effort; checks still run when the directory is unusable.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }
    info!(
        "event=cli_start module=cli status=ok core_version={} command={:?}",
        core_version(),
        cli.command
    );

    match &cli.command {
        Command::Options => {
            println!("x: {}", join_options(&X_OPTIONS));
            println!("r: {}", join_options(&R_OPTIONS));
            Ok(ExitCode::SUCCESS)
        }
        Command::Clock => {
            println!("{}", current_clock_text());
            Ok(ExitCode::SUCCESS)
        }
        command => run_with_storage(&config, command),
    }
}

fn run_with_storage(config: &AppConfig, command: &Command) -> Result<ExitCode> {
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let service = AreaCheckService::with_loaded_history(SqliteResultRepository::new(&conn))
        .context("failed to load result history")?;

    match command {
        Command::Form(args) => submit(&service, SubmissionMode::Form, args),
        Command::Canvas(args) => submit(&service, SubmissionMode::Canvas, args),
        Command::History(args) => {
            let results = service.results();
            if args.json {
                println!("{}", history_json(&results)?);
                return Ok(ExitCode::SUCCESS);
            }
            if results.is_empty() {
                println!("No results.");
            }
            for result in results {
                println!("{}", format_row(&result));
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Clear => {
            let removed = service.clear_results().context("failed to clear results")?;
            println!("Removed {removed} result(s).");
            Ok(ExitCode::SUCCESS)
        }
        Command::Options | Command::Clock => Ok(ExitCode::SUCCESS),
    }
}

fn submit(
    service: &AreaCheckService<SqliteResultRepository<'_>>,
    mode: SubmissionMode,
    args: &PointArgs,
) -> Result<ExitCode> {
    match service.check(mode, &args.to_input()) {
        Ok(result) => {
            println!("{}", format_row(&result));
            Ok(ExitCode::SUCCESS)
        }
        Err(CheckError::Validation(err)) => {
            eprintln!("Error: {err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(db_path) = &cli.db_path {
        config.db_path = db_path.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = log_dir.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    config
}

fn format_row(result: &CalculationResult) -> String {
    format!(
        "x={} y={} r={} {} time={} at={}",
        result.x(),
        result.y(),
        result.r(),
        result.hit_status(),
        result.formatted_execution_time(),
        result.formatted_timestamp()
    )
}

fn history_json(results: &[Arc<CalculationResult>]) -> Result<String> {
    let records = results.iter().map(Arc::as_ref).collect::<Vec<_>>();
    serde_json::to_string(&records).context("failed to serialize result history")
}

fn join_options(options: &[f64]) -> String {
    options
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
