//! mazegen
//!
//! Generates one maze from command line flags and prints it to stdout.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use mz_cli::Args;
use mz_cli::logging::init_logging;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = args.resolve()?;
    let maze = mz_core::generate(config).context("failed to generate maze")?;

    print!("{}", maze.render());
    if args.dead_ends {
        let json = serde_json::to_string(&maze.dead_ends).context("failed to encode dead ends")?;
        println!("{json}");
    }
    Ok(())
}
