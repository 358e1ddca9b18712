mod cli;
mod config;
mod convert;
mod export_cmd;
mod hints;
mod logging;
mod map_cmd;
mod review_cmd;
mod schedule;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Map(args) => map_cmd::run(args),
        Command::Review(args) => review_cmd::run(args),
        Command::Export(args) => export_cmd::run(args),
    }
}
