use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use loxscan::{
    config::ScannerConfig, errors::errors::Error as ScanError, lexer::lexer::tokenize_with, render_error,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the tokens of a Lox source file, one per line.
#[derive(Parser)]
#[command(name = "loxscan")]
#[command(version)]
#[command(about = "Lox scanner", long_about = None)]
struct Cli {
    /// Source file to scan
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Fail on bytes that start no token instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Allow punctuation right after a fractional number, as in `f(1.5);`
    #[arg(long)]
    lenient_numbers: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored log output
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{rendered}")]
    Scan { rendered: String, source: ScanError },
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

fn main() -> ExitCode {
    // Usage errors share the exit status of every other failure.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            return if error.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprint!("{}", error);
            if !matches!(error, CliError::Scan { .. }) {
                eprintln!();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    init_logging(cli.verbose, cli.no_color)?;

    let mut config = if cli.strict {
        ScannerConfig::strict()
    } else {
        ScannerConfig::default()
    };
    if cli.lenient_numbers {
        config = config.lenient_numbers();
    }

    let source = fs::read(&cli.input).map_err(|source| CliError::Io {
        path: cli.input.clone(),
        source,
    })?;

    let file_name = cli
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.input.to_string_lossy().into_owned());

    let start = Instant::now();
    let tokens = tokenize_with(&source, Some(file_name), config).map_err(|error| {
        CliError::Scan {
            rendered: render_error(&error, &source),
            source: error,
        }
    })?;
    debug!(elapsed = ?start.elapsed(), "tokenized");
    info!(count = tokens.len(), file = %cli.input.display(), "scanned");

    for token in &tokens {
        println!("{}", token);
    }

    Ok(())
}

fn init_logging(verbose: bool, no_color: bool) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
