//! Project configuration (`Amalgam.toml`).
//!
//! Every key is optional. Values present in the file override the built-in
//! Lua profile; command-line flags override both.
//!
//! ```toml
//! [paths]
//! source_dir = "lua-5.4.7/src"
//! output = "dist/luamalg.h"
//!
//! [amalgam]
//! lua_version = "5.4.7"
//! exclude = ["ljumptab.h"]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::AmalgamManifest;

/// Name of the project configuration file.
pub const CONFIG_FILE_NAME: &str = "Amalgam.toml";

/// Default directory holding the Lua sources.
pub const DEFAULT_SOURCE_DIR: &str = "lua";

/// Default output header.
pub const DEFAULT_OUTPUT: &str = "luamalg.h";

/// Luamalg configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input and output locations
    pub paths: PathsConfig,

    /// Manifest overrides
    pub amalgam: AmalgamConfig,
}

/// Input and output locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory the file names are resolved against
    pub source_dir: Option<PathBuf>,

    /// Destination of the amalgamated header
    pub output: Option<PathBuf>,
}

/// Overrides for the built-in manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AmalgamConfig {
    /// Source files in emission order
    pub sources: Option<Vec<String>>,

    /// Seed headers in emission order
    pub headers: Option<Vec<String>>,

    /// Headers never emitted on their own
    pub exclude: Option<Vec<String>>,

    /// Header followed by the epilogue
    pub config_header: Option<String>,

    /// Private-header prefix
    pub include_prefix: Option<String>,

    /// Macros enabling the implementation section
    pub implementation_macros: Option<Vec<String>>,

    /// Lua release named in the built-in prologue
    pub lua_version: Option<String>,

    /// Replacement prologue text
    pub prologue: Option<String>,

    /// Replacement epilogue text
    pub epilogue: Option<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        merge_opt(&mut self.paths.source_dir, other.paths.source_dir);
        merge_opt(&mut self.paths.output, other.paths.output);

        let (a, b) = (&mut self.amalgam, other.amalgam);
        merge_opt(&mut a.sources, b.sources);
        merge_opt(&mut a.headers, b.headers);
        merge_opt(&mut a.exclude, b.exclude);
        merge_opt(&mut a.config_header, b.config_header);
        merge_opt(&mut a.include_prefix, b.include_prefix);
        merge_opt(&mut a.implementation_macros, b.implementation_macros);
        merge_opt(&mut a.lua_version, b.lua_version);
        merge_opt(&mut a.prologue, b.prologue);
        merge_opt(&mut a.epilogue, b.epilogue);
    }

    /// Build the manifest: the Lua profile with this config applied.
    pub fn manifest(&self) -> AmalgamManifest {
        let a = &self.amalgam;
        let mut manifest = match &a.lua_version {
            Some(version) => AmalgamManifest::lua_with_version(version),
            None => AmalgamManifest::lua(),
        };

        if let Some(sources) = &a.sources {
            manifest.sources = sources.clone();
        }
        if let Some(headers) = &a.headers {
            manifest.headers = headers.clone();
        }
        if let Some(exclude) = &a.exclude {
            manifest.excluded_headers = exclude.clone();
        }
        if let Some(config_header) = &a.config_header {
            manifest.config_header = config_header.clone();
        }
        if let Some(prefix) = &a.include_prefix {
            manifest.include_prefix = prefix.clone();
        }
        if let Some(macros) = &a.implementation_macros {
            manifest.implementation_macros = macros.clone();
        }
        if let Some(prologue) = &a.prologue {
            manifest.prologue = prologue.clone();
        }
        if let Some(epilogue) = &a.epilogue {
            manifest.config_epilogue = epilogue.clone();
        }
        manifest
    }

    /// Directory the file names resolve against.
    pub fn source_dir(&self) -> PathBuf {
        self.paths
            .source_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_DIR))
    }

    /// Destination of the amalgamated header.
    pub fn output(&self) -> PathBuf {
        self.paths
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }
}

fn merge_opt<T>(dst: &mut Option<T>, src: Option<T>) {
    if src.is_some() {
        *dst = src;
    }
}

/// Load the project configuration.
///
/// An explicit path must exist. Otherwise `Amalgam.toml` in `dir` is used
/// when present, and defaults apply when it is not.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    match explicit {
        Some(path) => config.merge(Config::load(path)?),
        None => {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.exists() {
                tracing::debug!("Using {}", path.display());
                config.merge(Config::load(&path)?);
            }
        }
    }

    Ok(config)
}
