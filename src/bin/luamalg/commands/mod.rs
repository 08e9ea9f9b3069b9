//! Command implementations

pub mod check;
pub mod completions;
pub mod generate;
pub mod plan;

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;
use luamalg::core::{AmalgamManifest, DirStore};
use luamalg::util::load_config;

/// Manifest and locations resolved from config and flags.
pub struct Session {
    pub manifest: AmalgamManifest,
    pub store: DirStore,
    pub output: PathBuf,
}

impl Session {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine current directory")?;
        let config = load_config(cli.manifest.as_deref(), &cwd)?;

        let source_dir = cli.source_dir.clone().unwrap_or_else(|| config.source_dir());
        let output = cli.output.clone().unwrap_or_else(|| config.output());

        tracing::debug!("Sources from {}", source_dir.display());
        Ok(Session {
            manifest: config.manifest(),
            store: DirStore::new(source_dir),
            output,
        })
    }
}
