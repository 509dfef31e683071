//! PhraseSplit — split a secret phrase into Shamir shares and recover it
//!
//! # Usage
//!
//! ```bash
//! echo "my secret phrase" | phrasesplit split --shares 5 --threshold 3
//! cat shares.txt | phrasesplit combine
//! ```

mod commands;
mod config;
mod memory;

use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Split,
    Combine,
}

#[derive(Debug, Default)]
struct Args {
    command: Option<Command>,
    config_path: Option<PathBuf>,
    total_shares: Option<u8>,
    threshold: Option<u8>,
    help: bool,
    version: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;

    if args.help {
        print_help();
        return Ok(());
    }
    if args.version {
        println!("phrasesplit {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut cli_config = config::CliConfig::load(args.config_path.as_deref())
        .context("Failed to load configuration")?;
    cli_config
        .apply_env_overrides()
        .context("Invalid environment override")?;
    if let Some(n) = args.total_shares {
        cli_config.split.total_shares = n;
    }
    if let Some(k) = args.threshold {
        cli_config.split.threshold = k;
    }

    cli_config
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::new()
        .parse_filters(&cli_config.logging.log_level)
        .parse_default_env()
        .init();

    // After the logger so a failure is reported, before any phrase is read
    memory::disable_core_dumps();

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match args.command {
        Some(Command::Split) => {
            commands::run_split(&mut stdin.lock(), &mut stdout.lock(), &cli_config.split)
        }
        Some(Command::Combine) => commands::run_combine(&mut stdin.lock(), &mut stdout.lock()),
        None => {
            print_help();
            anyhow::bail!("No command given")
        }
    }
}

// Minimal hand-rolled parsing, no clap dependency needed
fn parse_args<I: Iterator<Item = String>>(mut iter: I) -> Result<Args> {
    let mut args = Args::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "split" => args.command = Some(Command::Split),
            "combine" => args.command = Some(Command::Combine),
            "--config" | "-c" => {
                let path = iter
                    .next()
                    .context("--config requires a path argument")?;
                args.config_path = Some(PathBuf::from(path));
            }
            "--shares" | "-n" => {
                let value = iter.next().context("--shares requires a number")?;
                args.total_shares = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid share count: {}", value))?,
                );
            }
            "--threshold" | "-k" => {
                let value = iter.next().context("--threshold requires a number")?;
                args.threshold = Some(
                    value
                        .parse()
                        .with_context(|| format!("Invalid threshold: {}", value))?,
                );
            }
            "--help" | "-h" => args.help = true,
            "--version" | "-V" => args.version = true,
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn print_help() {
    println!(
        r#"PhraseSplit — Shamir secret sharing for secret phrases

USAGE:
    phrasesplit split   [OPTIONS]   Read a phrase on stdin, print shares
    phrasesplit combine [OPTIONS]   Read shares on stdin, print the phrase

OPTIONS:
    -n, --shares <N>      Number of shares to create (2-255, default: 5)
    -k, --threshold <K>   Shares needed to recover (2-N, default: 3)
    -c, --config <PATH>   Config file path (default: ~/.config/phrasesplit.toml)
    -h, --help            Show this help message
    -V, --version         Show version

ENVIRONMENT VARIABLES (override config file):
    PHRASESPLIT_SHARES        Number of shares
    PHRASESPLIT_THRESHOLD     Recovery threshold
    PHRASESPLIT_LOG_LEVEL     Log level (error/warn/info/debug/trace)

NOTES:
    Shares do not record the threshold. Combining fewer shares than the
    threshold prints a wrong phrase instead of an error.
"#
    );
}
