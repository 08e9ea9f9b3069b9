//! Header discovery.
//!
//! Extends the seed headers with every private header the sources include,
//! in first-discovery order: sources in manifest order, lines top to bottom.

use anyhow::{Context, Result};

use super::rewrite::IncludeRewriter;
use crate::core::registry::HeaderRegistry;
use crate::core::store::{SourceStore, TextFile};
use crate::core::AmalgamManifest;

/// Build the header registry for a manifest, reading sources from `store`.
pub fn discover_headers(
    manifest: &AmalgamManifest,
    store: &dyn SourceStore,
    rewriter: &IncludeRewriter,
) -> Result<HeaderRegistry> {
    let mut registry = HeaderRegistry::new(&manifest.headers, &manifest.excluded_headers);

    for name in &manifest.sources {
        let file = store
            .read(name)
            .with_context(|| format!("failed to scan `{}` for includes", name))?;
        scan_file(&mut registry, rewriter, &file);
    }

    Ok(registry)
}

/// Add the local includes of one file to `registry`.
pub fn scan_file(registry: &mut HeaderRegistry, rewriter: &IncludeRewriter, file: &TextFile) {
    for line in file.lines() {
        let Some(header) = rewriter.included_name(line) else {
            continue;
        };
        if registry.insert(header) {
            tracing::debug!("Discovered {} (from {})", header, file.name());
        } else if registry.is_excluded(header) {
            tracing::debug!("Skipping excluded {} (from {})", header, file.name());
        }
    }
}
