//! Command-line interface definitions.
//!
//! Defines the CLI structure for the surebet application using `clap`:
//! running the animated simulation, evaluating a single match, generating
//! replayable match files, and managing configuration.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use super::paths;
use crate::application::stream::MissingOddsPolicy;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Sports betting arbitrage simulator with animated terminal charts
#[derive(Parser, Debug)]
#[command(name = "surebet")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the surebet CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the simulation: evaluate matches, animate the charts, print the summary
    Run(Box<RunArgs>),

    /// Evaluate a single match given on the command line
    Evaluate(EvaluateArgs),

    /// Generate a match file that `run --input` can replay
    Generate(GenerateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `surebet config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that read the configuration.
///
/// Without `--config` the default location is used when it exists and
/// built-in defaults otherwise.
#[derive(Parser, Debug, Default)]
pub struct ConfigPathArg {
    /// Path to the configuration file [default: ~/.surebet/config.toml]
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl ConfigPathArg {
    /// The file that will be read.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::default_config)
    }

    /// Load the configuration this argument points at.
    ///
    /// # Errors
    ///
    /// An explicitly named file must exist and be valid; the default file
    /// only has to be valid if present.
    pub fn load(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Config::load_or_default(paths::default_config()),
        }
    }
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `run` subcommand.
///
/// All optional fields override the corresponding configuration file values.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Number of matches to generate.
    #[arg(short = 'n', long = "matches")]
    pub matches: Option<usize>,

    /// Amount spread across both outcomes of every match.
    #[arg(long)]
    pub investment: Option<Decimal>,

    /// Lower bound for generated odds.
    #[arg(long)]
    pub odds_low: Option<Decimal>,

    /// Upper bound for generated odds.
    #[arg(long)]
    pub odds_high: Option<Decimal>,

    /// Seed for reproducible odds.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Read matches from a JSON file instead of generating them.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Pause between animation frames in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Skip the animated charts and print only the summary.
    #[arg(long)]
    pub no_animate: bool,

    /// What to do with matches missing odds (skip, abort).
    #[arg(long, value_name = "POLICY")]
    pub on_missing_odds: Option<MissingOddsPolicy>,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(Parser, Debug)]
pub struct EvaluateArgs {
    /// Team A odds, one per bookmaker (e.g. 2.10,2.05).
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub team_a: Vec<Decimal>,

    /// Team B odds, one per bookmaker (e.g. 1.95,2.00).
    #[arg(long, value_delimiter = ',', num_args = 1.., required = true)]
    pub team_b: Vec<Decimal>,

    /// Amount to spread across both outcomes.
    #[arg(long)]
    pub investment: Option<Decimal>,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Number of matches to generate.
    #[arg(short = 'n', long = "matches")]
    pub matches: Option<usize>,

    /// Seed for reproducible odds.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lower bound for generated odds.
    #[arg(long)]
    pub odds_low: Option<Decimal>,

    /// Upper bound for generated odds.
    #[arg(long)]
    pub odds_high: Option<Decimal>,

    /// Output file. Prints to stdout when omitted.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub config: ConfigPathArg,
}
