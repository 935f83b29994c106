//! `ippis`: browse IPPIS admin tables from the terminal.

mod cli;
mod commands;
mod data;
mod error;
mod logging;
mod paths;

use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.log_file.as_deref()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Screens => commands::screens::run(),
        Commands::Show(args) => commands::show::run(&args),
        Commands::Browse(args) => commands::browse::run(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
