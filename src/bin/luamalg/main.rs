//! Luamalg CLI - amalgamate Lua into a single header

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("luamalg=debug")
    } else {
        EnvFilter::new("luamalg=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    // Execute command
    match &cli.command {
        None | Some(Commands::Generate) => commands::generate::execute(&Session::from_cli(&cli)?),
        Some(Commands::Check) => commands::check::execute(&Session::from_cli(&cli)?),
        Some(Commands::Plan(args)) => commands::plan::execute(&Session::from_cli(&cli)?, args),
        Some(Commands::Completions(args)) => commands::completions::execute(args),
    }
}
