//! Core data structures for Luamalg.
//!
//! - The manifest describing one amalgamation
//! - The header registry built from it
//! - The store the named files are read from

pub mod errors;
pub mod manifest;
pub mod registry;
pub mod store;

pub use errors::{ManifestError, StoreError};
pub use manifest::AmalgamManifest;
pub use registry::HeaderRegistry;
pub use store::{DirStore, SourceStore, TextFile};
