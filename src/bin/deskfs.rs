//! deskfs CLI Binary
//!
//! Command-line interface for the deskfs virtual file system.

use clap::Parser;
use deskfs::logging::init_logging;
use deskfs::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // A broken logger should not block file system access.
    let logging = cli.logging_config(&config.logging);
    if let Err(e) = init_logging(Some(&logging), cli.log_file.clone()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let context = CliContext::new(config, cli.ephemeral)?;
    let output = context.execute(&cli.command)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
