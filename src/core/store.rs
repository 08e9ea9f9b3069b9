//! Read-only access to the files being amalgamated.

use std::io::ErrorKind;
use std::path::PathBuf;

use super::errors::StoreError;

/// A text file read verbatim from a store.
///
/// Each line keeps its original terminator (`\n` or `\r\n`); only the last
/// line may lack one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    name: String,
    lines: Vec<String>,
}

impl TextFile {
    /// Split `content` into lines, keeping terminators.
    pub fn new(name: impl Into<String>, content: &str) -> Self {
        TextFile {
            name: name.into(),
            lines: content.split_inclusive('\n').map(str::to_owned).collect(),
        }
    }

    /// The identifier this file was read under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lines in file order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

/// Source of named input files.
///
/// Reads are expected to be repeatable: reading the same name twice yields
/// the same content.
pub trait SourceStore {
    /// Read the named file in full.
    fn read(&self, name: &str) -> Result<TextFile, StoreError>;
}

/// A store backed by a directory on disk.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    /// Full path for a file identifier.
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl SourceStore for DirStore {
    fn read(&self, name: &str) -> Result<TextFile, StoreError> {
        let path = self.path_of(name);
        let bytes = std::fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => StoreError::Missing { path: path.clone() },
            _ => StoreError::Read {
                path: path.clone(),
                source,
            },
        })?;
        let content =
            String::from_utf8(bytes).map_err(|source| StoreError::Encoding { path, source })?;
        Ok(TextFile::new(name, &content))
    }
}
