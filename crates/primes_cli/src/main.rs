mod commands;
mod output;
mod report;

use clap::{CommandFactory, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use primes_core::{PrimeAnalyzer, PrimesConfig};
use std::path::PathBuf;
use tracing::info;

use crate::commands::analyze::Format;

#[derive(Parser)]
#[command(name = "primes")]
#[command(about = "Primes, their statistics and other related numbers in a range")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// `x` analyses {1..x}, `x y` analyses {x..y}
    #[arg(value_name = "BOUND", num_args = 1..=2, allow_negative_numbers = true)]
    bounds: Vec<String>,

    /// Configuration file path
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Largest accepted end of range, exclusive (overrides config)
    #[arg(long, global = true)]
    max_bound: Option<u64>,

    /// Print the full analysis as JSON
    #[arg(long)]
    json: bool,

    /// Only print the outcome line and timings
    #[arg(long)]
    no_stats: bool,

    /// Do not print phase timings
    #[arg(long)]
    no_timings: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Save current configuration to file
    Save {
        /// Path to save configuration
        #[arg(default_value = "primes.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .rgb_colors(miette::RgbColors::Preferred)
                .with_cause_chain()
                .color(true)
                .context_lines(5)
                .tab_width(2)
                .break_words(true)
                .build(),
        )
    }))?;
    miette::set_panic_hook();
    let cli = Cli::parse();

    // Initialize tracing
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if cli.debug {
        EnvFilter::new("primes_core=debug,primes_cli=debug")
    } else {
        // Show info level for primes crates, warn for everything else
        EnvFilter::new("primes_core=info,primes_cli=info,warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_timer(tracing_subscriber::fmt::time::LocalTime::rfc_3339())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        info!("Loading config from: {:?}", config_path);
        PrimesConfig::load_from(config_path)?
    } else {
        tracing::debug!("Loading config from standard locations");
        PrimesConfig::load()?
    };

    // Apply CLI overrides
    if let Some(max_bound) = cli.max_bound {
        info!("Overriding max bound with: {}", max_bound);
        config.engine.max_bound = max_bound;
        config.validate("--max-bound")?;
    }
    if cli.no_stats {
        config.display.show_statistics = false;
    }
    if cli.no_timings {
        config.display.show_timings = false;
    }

    match &cli.command {
        Some(Commands::Config { cmd }) => match cmd {
            ConfigCommands::Show => commands::config::show(&config, cli.config.as_ref())?,
            ConfigCommands::Save { path } => commands::config::save(&config, path)?,
        },
        None if cli.bounds.is_empty() => {
            Cli::command().print_help().into_diagnostic()?;
        }
        None => {
            let format = if cli.json {
                Format::Json
            } else {
                Format::Human(config.display.clone())
            };
            let analyzer = PrimeAnalyzer::new(config.engine.clone());
            if !commands::analyze::run(&analyzer, &cli.bounds, &format)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_one_or_two_bounds() {
        let cli = Cli::try_parse_from(["primes", "25"]).unwrap();
        assert_eq!(cli.bounds, vec!["25"]);

        let cli = Cli::try_parse_from(["primes", "-5", "25", "--json"]).unwrap();
        assert_eq!(cli.bounds, vec!["-5", "25"]);
        assert!(cli.json);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_three_bounds_rejected() {
        assert!(Cli::try_parse_from(["primes", "1", "2", "3"]).is_err());
    }

    #[test]
    fn test_no_arguments_parses() {
        let cli = Cli::try_parse_from(["primes"]).unwrap();
        assert!(cli.bounds.is_empty());
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_config_subcommand() {
        let cli = Cli::try_parse_from(["primes", "config", "save", "out.toml"]).unwrap();
        match cli.command {
            Some(Commands::Config {
                cmd: ConfigCommands::Save { path },
            }) => assert_eq!(path, PathBuf::from("out.toml")),
            _ => panic!("expected config save"),
        }

        let cli = Cli::try_parse_from(["primes", "--max-bound", "1000", "config", "show"]).unwrap();
        assert_eq!(cli.max_bound, Some(1000));
    }
}
