//! Roulette delay analyzer — command-line entry point.
//!
//! Loads configuration, initialises structured logging, reads a draw
//! history from the configured source and prints one report per scheme.
//! With `output.interactive = true` it runs a menu loop instead.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

use roulette_delay::analyzer::DelayAnalyzer;
use roulette_delay::config::{AppConfig, OutputFormat};
use roulette_delay::input::{FileSource, ManualSource, OutcomeSource, SampleSource};
use roulette_delay::types::{Scheme, SigmaLevel};

const BANNER: &str = r#"
  ____  _____ _        _ __   __
 |  _ \| ____| |      / \\ \ / /
 | | | |  _| | |     / _ \\ V /
 | |_| | |___| |___ / ___ \| |
 |____/|_____|_____/_/   \_\_|

  Roulette column & dozen delay analyzer
"#;

const DEFAULT_CONFIG: &str = "config.toml";

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let config_path =
        std::env::var("ROULETTE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG.to_string());
    let cfg = AppConfig::load_or_default(&config_path)?;

    println!("{BANNER}");
    info!(
        sigma = %cfg.analysis.sigma_level,
        schemes = ?cfg.analysis.schemes,
        source = ?cfg.input.source,
        interactive = cfg.output.interactive,
        "Analyzer starting up"
    );

    if cfg.output.interactive {
        run_menu(&cfg)
    } else {
        run_once(&cfg)
    }
}

/// Read the configured source once and print the reports.
fn run_once(cfg: &AppConfig) -> Result<()> {
    let source = cfg.input.build_source()?;
    let outcomes = source.read_outcomes()?;
    let analyzer = DelayAnalyzer::with_history(outcomes);

    if analyzer.is_empty() {
        warn!(source = source.name(), "No valid outcomes loaded");
        return Ok(());
    }

    print_reports(
        &analyzer,
        &cfg.analysis.schemes,
        cfg.analysis.sigma_level,
        cfg.output.format,
    )
}

/// Interactive loop: choose a source, choose a sigma level, print reports.
fn run_menu(cfg: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("\n{}", "=".repeat(50));
        println!("ROULETTE DELAY ANALYZER");
        println!("{}", "=".repeat(50));
        println!("Choose how to load the history:");
        println!("1. From a history file (CSV / text)");
        println!("2. Manual entry");
        println!("3. Sample data");
        println!("0. Exit");

        let Some(choice) = prompt(&mut lines, "\nOption: ")? else {
            break;
        };

        let source: Box<dyn OutcomeSource> = match choice.trim() {
            "0" => {
                println!("Goodbye!");
                break;
            }
            "1" => {
                let Some(path) = prompt(&mut lines, "History file (e.g. history.csv): ")? else {
                    break;
                };
                let path = path.trim();
                if path.is_empty() {
                    continue;
                }
                Box::new(FileSource::new(path))
            }
            "2" => {
                println!("\nEnter the numbers separated by spaces or commas");
                println!("Example: 15 22 8 31 4 17 25");
                let Some(text) = prompt(&mut lines, "\nNumbers: ")? else {
                    break;
                };
                Box::new(ManualSource::new(text))
            }
            "3" => Box::new(SampleSource),
            other => {
                println!("Invalid option: {other}");
                continue;
            }
        };

        let outcomes = match source.read_outcomes() {
            Ok(outcomes) => outcomes,
            Err(e) => {
                error!(error = %e, source = source.name(), "Failed to read outcomes");
                println!("Error: {e:#}");
                continue;
            }
        };

        let analyzer = DelayAnalyzer::with_history(outcomes);
        if analyzer.is_empty() {
            println!("No valid numbers were loaded");
            continue;
        }
        println!("Loaded {} numbers from {}", analyzer.len(), source.name());

        println!("\n--- ANALYSIS SETTINGS ---");
        println!("Confidence level:");
        println!("1. Conservative (1σ) - more signals, less reliable");
        println!("2. Balanced (2σ) - recommended");
        println!("3. Strict (3σ) - few signals, very reliable");
        let Some(answer) = prompt(&mut lines, "Choose level (1-3): ")? else {
            break;
        };
        let level = match answer.trim().parse::<i64>() {
            Ok(n) => SigmaLevel::clamped(n),
            Err(_) => {
                println!("Using configured level {}", cfg.analysis.sigma_level);
                cfg.analysis.sigma_level
            }
        };

        print_reports(&analyzer, &cfg.analysis.schemes, level, cfg.output.format)?;

        if prompt(&mut lines, "\nPress Enter to continue...")?.is_none() {
            break;
        }
    }

    Ok(())
}

/// Print one report per scheme in the configured format.
fn print_reports(
    analyzer: &DelayAnalyzer,
    schemes: &[Scheme],
    level: SigmaLevel,
    format: OutputFormat,
) -> Result<()> {
    for scheme in schemes {
        let report = analyzer.analyze(*scheme, level);
        match format {
            OutputFormat::Text => println!("\n{report}"),
            OutputFormat::Json => println!("{}", report.to_json()?),
        }
    }
    Ok(())
}

/// Print `message` and read one line. `None` on end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}

/// Initialise the `tracing` subscriber. Logs go to stderr so reports on
/// stdout stay machine-readable.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("roulette_delay=info"));

    let json_logging = std::env::var("ROULETTE_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(io::stderr)
            .init();
    }
}
