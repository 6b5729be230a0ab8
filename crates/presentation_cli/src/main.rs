//! Weather tool CLI
//!
//! Command-line front end for the current-weather lookup tool.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_tool::{AppConfig, LogFormat, LoggingConfig, Tool, WeatherTool};

/// Weather tool CLI
#[derive(Parser)]
#[command(name = "weather-tool")]
#[command(author, version, about = "Current weather lookup via Open-Meteo", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true, env = "WEATHER_TOOL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the current weather for a location
    ///
    /// Example: weather-tool lookup New York
    Lookup {
        /// City name or location; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        location: Vec<String>,
    },

    /// Print the tool definition as JSON
    Describe,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Set up logging on stderr; `RUST_LOG` wins over `-v`, which wins over config
fn init_logging(verbose: u8, logging: &LoggingConfig) {
    let filter = log_filter_from_verbosity(verbose).unwrap_or(logging.level.as_str());
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    let json = logging.format == LogFormat::Json;

    tracing_subscriber::registry()
        .with(env_filter)
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.logging);

    let tool = WeatherTool::from_config(config.weather)?;

    match cli.command {
        Commands::Lookup { location } => {
            let location = location.join(" ");
            println!("{}", tool.run(&location).await);
        },
        Commands::Describe => {
            println!("{}", serde_json::to_string_pretty(&tool.definition())?);
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(args)
    }

    #[test]
    fn log_filter_verbosity_zero_defers_to_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_levels() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn cli_parses_lookup_with_multiple_words() {
        let cli = parse_args(&["weather-tool", "lookup", "New", "York"]).unwrap();
        match cli.command {
            Commands::Lookup { location } => assert_eq!(location.join(" "), "New York"),
            Commands::Describe => panic!("Expected Lookup command"),
        }
    }

    #[test]
    fn cli_lookup_requires_location() {
        assert!(parse_args(&["weather-tool", "lookup"]).is_err());
    }

    #[test]
    fn cli_parses_describe() {
        let cli = parse_args(&["weather-tool", "describe"]).unwrap();
        assert!(matches!(cli.command, Commands::Describe));
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = parse_args(&["weather-tool", "lookup", "Paris", "-vv", "-c", "custom.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(parse_args(&["weather-tool"]).is_err());
    }
}
