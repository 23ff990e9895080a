//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "rulebook", version, about = "Validate nested data with rule strings")]
pub struct Cli {
    /// Configuration file (defaults to ./rulebook.toml when present)
    #[arg(long, global = true, env = "RULEBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a data file against a rules file
    Check(CheckArgs),
    /// Read the value at a dot-path
    Get(GetArgs),
    /// Write a value at a dot-path and print the result
    Set(SetArgs),
    /// Report whether text contains script-injection markers
    Scan(ScanArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Data document (.json, .yaml, .yml, .toml)
    #[arg(long)]
    pub data: PathBuf,

    /// Field rules document mapping paths to rule strings or lists
    #[arg(long)]
    pub rules: PathBuf,

    /// Message overrides keyed by `field.rule` or `rule`
    #[arg(long)]
    pub messages: Option<PathBuf>,

    /// Fail on rule names nobody registered
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Output::Text)]
    pub output: Output,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Data document
    #[arg(long)]
    pub data: PathBuf,

    /// Dot-path, e.g. `user.address.city`
    pub path: String,

    /// JSON value printed when the path does not resolve
    #[arg(long)]
    pub default: Option<String>,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Data document
    #[arg(long)]
    pub data: PathBuf,

    /// Dot-path to write
    pub path: String,

    /// JSON value to write
    pub value: String,

    /// Write the result back to the data file instead of printing it
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Text to scan
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Output {
    /// `field: message` lines
    Text,
    /// The error map as JSON
    Json,
}
