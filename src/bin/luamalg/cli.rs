//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Luamalg - Lua core, libraries and interpreter in a single header
#[derive(Parser)]
#[command(name = "luamalg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the amalgamation config (defaults to ./Amalgam.toml if present)
    #[arg(long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Directory containing the headers and sources
    #[arg(long, global = true)]
    pub source_dir: Option<PathBuf>,

    /// Path of the generated header
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Defaults to `generate`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the amalgamated header
    Generate,

    /// Fail if the generated header is missing or out of date
    Check,

    /// Show the header and source order without writing anything
    Plan(PlanArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct PlanArgs {
    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
