//! `rulebook` command-line interface.

mod cli;
mod commands;
mod config;
mod document;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(cli)?;
    rulebook_log::init_with(config.log.clone()).context("failed to initialize logging")?;
    tracing::debug!(?config, "configuration loaded");

    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Check(args) => commands::check::run(args, &config, &mut out),
        Command::Get(args) => commands::get::run(args, &mut out),
        Command::Set(args) => commands::set::run(args, &mut out),
        Command::Scan(args) => commands::scan::run(args, &mut out),
    }
}
