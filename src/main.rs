mod cli;
mod config;
mod convert;
mod hours_cmd;
mod input;
mod logging;
mod monthly_cmd;
mod output;
mod window_cmd;

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
        Command::Window(args) => window_cmd::run(args),
        Command::Monthly(args) => monthly_cmd::run(args),
        Command::Hours(args) => hours_cmd::run(args),
    }
}
