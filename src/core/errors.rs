//! Error types for reading inputs and validating manifests.

use std::path::PathBuf;

use thiserror::Error;

/// Error while reading a named file from a [`SourceStore`](super::store::SourceStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("input file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read input file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file is not valid UTF-8: {}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// A manifest that cannot produce a well-formed amalgamation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ManifestError {
    #[error("manifest lists no source files")]
    NoSources,

    #[error("source file `{0}` is listed more than once")]
    DuplicateSource(String),

    #[error("header `{0}` is listed more than once in the seed headers")]
    DuplicateHeader(String),

    #[error("configuration header `{0}` is not one of the seed headers")]
    ConfigHeaderNotSeeded(String),

    #[error("header `{0}` is both a seed header and excluded")]
    ExcludedSeedHeader(String),

    #[error("at least one implementation macro is required")]
    NoImplementationMacros,

    #[error("implementation macro `{0}` is not a valid C identifier")]
    InvalidMacro(String),
}
