//! Test utilities for Luamalg unit tests.
//!
//! Provides an in-memory [`SourceStore`] and the small synthetic manifests
//! used across the ops tests.

pub mod fixtures;

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::errors::StoreError;
use crate::core::store::{SourceStore, TextFile};

pub use fixtures::*;

/// In-memory file store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    files: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Add a file with the given content.
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }

    pub fn content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(String::as_str)
    }
}

impl SourceStore for MemoryStore {
    fn read(&self, name: &str) -> Result<TextFile, StoreError> {
        self.files
            .get(name)
            .map(|content| TextFile::new(name, content))
            .ok_or_else(|| StoreError::Missing {
                path: PathBuf::from(name),
            })
    }
}
