mod commands;
mod config;
mod database;
mod errors;
mod execute;
mod models;
mod parse;
mod utils;

use clap::Parser;
use colored::*;
use commands::{CommandParser, HELP};
use config::load_config;
use database::SqliteStore;
use execute::{execute, Context};
use models::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse arguments
    let args: Cli = Cli::parse();

    if let Err(e) = stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(args.verbose as usize + 1)
        .init()
    {
        eprintln!("Could not set up logging: {}", e);
    }

    // Build the command
    let mut parser = CommandParser::new(args.argv());
    parser.package();
    if !parser.flags().is_empty() {
        log::warn!("ignoring flags {:?}", parser.flags());
    }

    if parser.failed() {
        for err in parser.errors() {
            println!("{}", err.to_string().bright_red());
            println!();
        }
        return ExitCode::FAILURE;
    }

    if parser.nothing() {
        println!("{}", HELP);
        return ExitCode::FAILURE;
    }
    let Some(command) = parser.collect() else {
        return ExitCode::FAILURE;
    };

    match run(command, &args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e.to_string().bright_red());
            ExitCode::FAILURE
        }
    }
}

fn run(command: models::Command, args: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(database) = &args.database {
        config.database = Some(database.clone());
    }

    let store = SqliteStore::open(&config.database_path()?)?;
    let ctx = Context {
        config: &config,
        store: &store,
    };

    log::info!("executing {}", command.kind().as_str());
    execute(command, &ctx)
}
