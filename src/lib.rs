//! Luamalg - Lua core, libraries and interpreter in a single header
//!
//! This crate merges a fixed, ordered set of C headers and sources into one
//! header. Declarations are exposed unconditionally; the implementation is
//! compiled only where an implementation macro is defined.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities for Luamalg unit tests.
///
/// In-memory stores and synthetic manifests, only available in tests.
#[cfg(test)]
pub mod test_support;

pub use core::{AmalgamManifest, DirStore, HeaderRegistry, SourceStore};
pub use ops::{check, generate, plan, render};
pub use util::Config;
