//! tintlog demo - exercise custom levels, colors and per-module thresholds.
//!
//! Runs a short script against the process-wide logger:
//! - emits TRACE and INFO lines from the main module
//! - runs a worker on its own thread with its own module threshold
//! - optionally emits a FATAL line, which ends the process when admitted

#![forbid(unsafe_code)]

mod worker;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tintlog_console::{ColorChoice, LevelValue, Logger, LoggerConfig, priority};

/// tintlog demo - colored logging with custom levels.
#[derive(Parser)]
#[command(name = "tintlog-demo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Global threshold: level name, alias, or number (default 1).
    #[arg(long, short = 'l')]
    level: Option<String>,

    /// Threshold for the worker module.
    #[arg(long, default_value = "20")]
    worker_level: String,

    /// Color output.
    #[arg(long, value_enum)]
    color: Option<ColorArg>,

    /// TOML config file (instead of TINTLOG_CONFIG).
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Emit this message at FATAL after the script.
    #[arg(long)]
    fatal: Option<String>,

    /// Print the registered levels and exit.
    #[arg(long)]
    list_levels: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = load_config(cli)?;
    let logger = config.apply(Logger::builder())?.build();

    if cli.list_levels {
        print_levels(&logger);
        return Ok(());
    }

    let worker_level = logger.registry().parse_threshold(&cli.worker_level)?;
    let logger = logger.install()?;

    tintlog_console::trace!("Trace Testing");
    tintlog_console::info!("Testing {}", 1);
    if logger.trace_enabled() {
        tintlog_console::trace!("trace functions enabled");
    }
    log::debug!("log facade routed through tintlog");

    std::thread::Builder::new()
        .name("worker".into())
        .spawn(move || worker::run(logger, worker_level))?
        .join()
        .map_err(|_| "worker thread panicked")?;

    if let Some(message) = &cli.fatal {
        tintlog_console::fatal!("{message}");
        tintlog_console::critical!("still running after fatal");
    }

    Ok(())
}

/// Config file or environment, then command-line overrides.
fn load_config(cli: &Cli) -> Result<LoggerConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => LoggerConfig::load(path)?.overlay_env(|key| std::env::var(key).ok())?,
        None => LoggerConfig::from_env()?,
    };

    if let Some(level) = &cli.level {
        config.level = Some(LevelValue::parse(level));
    } else if config.level.is_none() {
        config.level = Some(LevelValue::Priority(1));
    }
    if let Some(color) = cli.color {
        config.color = color.into();
    }
    Ok(config)
}

fn print_levels(logger: &Logger) {
    println!("{:<10} {:<10} {:>8}  TERMINATES", "NAME", "ALIAS", "PRIORITY");
    for level in logger.registry().sorted() {
        let alias = match level.alias() {
            "" => "-",
            alias => alias,
        };
        println!(
            "{:<10} {:<10} {:>8}  {}",
            level.name(),
            alias,
            level.priority(),
            if level.terminates() { "yes" } else { "no" }
        );
    }
    let threshold = logger.level();
    let admitted = logger
        .registry()
        .iter()
        .filter(|level| level.admitted_by(threshold))
        .count();
    println!();
    println!("threshold {threshold}: {admitted} of {} levels admitted", logger.registry().len());
    if threshold <= priority::TRACE {
        println!("trace output enabled");
    }
}
