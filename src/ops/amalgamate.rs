//! The amalgamation pipeline.
//!
//! Validates the manifest, discovers headers, renders the whole document in
//! memory and only then touches the destination. A run that fails on a
//! missing or undecodable input never leaves a partial header behind.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::discover::discover_headers;
use super::emit::{emit, EmitStats};
use super::rewrite::IncludeRewriter;
use crate::core::registry::HeaderRegistry;
use crate::core::store::SourceStore;
use crate::core::AmalgamManifest;
use crate::util::{fs, hash};

/// A rendered amalgamation.
#[derive(Debug, Clone)]
pub struct Amalgamation {
    /// Headers in the order they were emitted.
    pub registry: HeaderRegistry,
    /// The full output document.
    pub document: Vec<u8>,
    pub stats: EmitStats,
}

impl Amalgamation {
    /// SHA-256 of the document, hex-encoded.
    pub fn digest(&self) -> String {
        hash::sha256_bytes(&self.document)
    }
}

/// Render the amalgamation for `manifest` without writing it anywhere.
pub fn render(manifest: &AmalgamManifest, store: &dyn SourceStore) -> Result<Amalgamation> {
    manifest.validate().context("invalid amalgamation manifest")?;

    let rewriter = IncludeRewriter::new(&manifest.include_prefix)
        .context("invalid local-include prefix")?;

    tracing::debug!("Discovering headers from {} sources", manifest.sources.len());
    let registry = discover_headers(manifest, store, &rewriter)?;

    let (document, stats) = emit(Vec::new(), manifest, &registry, store, &rewriter)?;

    Ok(Amalgamation {
        registry,
        document,
        stats,
    })
}

/// Render the amalgamation and write it to `output`.
pub fn generate(
    manifest: &AmalgamManifest,
    store: &dyn SourceStore,
    output: &Path,
) -> Result<Amalgamation> {
    let amalgamation = render(manifest, store)?;
    fs::write_atomic(output, &amalgamation.document)?;

    tracing::info!(
        "Wrote {} ({} headers, {} sources, {} lines)",
        output.display(),
        amalgamation.stats.headers,
        amalgamation.stats.sources,
        amalgamation.stats.lines
    );
    Ok(amalgamation)
}

/// Whether an existing output matches what would be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale { expected: String, actual: String },
    Missing,
}

impl CheckOutcome {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, CheckOutcome::UpToDate)
    }
}

/// Compare `output` with a fresh rendering.
pub fn check(
    manifest: &AmalgamManifest,
    store: &dyn SourceStore,
    output: &Path,
) -> Result<CheckOutcome> {
    let amalgamation = render(manifest, store)?;

    if !output.exists() {
        return Ok(CheckOutcome::Missing);
    }

    let expected = amalgamation.digest();
    let actual = hash::sha256_file(output)?;
    if expected == actual {
        Ok(CheckOutcome::UpToDate)
    } else {
        Ok(CheckOutcome::Stale { expected, actual })
    }
}

/// Emission order without the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmalgamPlan {
    pub headers: Vec<String>,
    pub sources: Vec<String>,
    pub excluded_headers: Vec<String>,
    pub config_header: String,
    pub guard: String,
}

/// Resolve the header and source order for `manifest`.
pub fn plan(manifest: &AmalgamManifest, store: &dyn SourceStore) -> Result<AmalgamPlan> {
    manifest.validate().context("invalid amalgamation manifest")?;

    let rewriter = IncludeRewriter::new(&manifest.include_prefix)
        .context("invalid local-include prefix")?;
    let registry = discover_headers(manifest, store, &rewriter)?;

    Ok(AmalgamPlan {
        headers: registry.into_vec(),
        sources: manifest.sources.clone(),
        excluded_headers: manifest.excluded_headers.clone(),
        config_header: manifest.config_header.clone(),
        guard: manifest.guard_condition(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ManifestError;
    use crate::test_support::{scenario_manifest, scenario_store, MemoryStore};
    use tempfile::TempDir;

    #[test]
    fn test_render_is_deterministic() {
        let manifest = scenario_manifest();
        let store = scenario_store();

        let first = render(&manifest, &store).unwrap();
        let second = render(&manifest, &store).unwrap();
        assert_eq!(first.document, second.document);
        assert_eq!(first.digest(), second.digest());
    }

    #[test]
    fn test_render_rejects_invalid_manifest() {
        let mut manifest = scenario_manifest();
        manifest.sources.push("a.c".to_string());

        let err = render(&manifest, &scenario_store()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ManifestError>(),
            Some(&ManifestError::DuplicateSource("a.c".to_string()))
        );
    }

    #[test]
    fn test_generate_writes_output() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("out").join("amalg.h");

        let result = generate(&scenario_manifest(), &scenario_store(), &output).unwrap();
        assert_eq!(std::fs::read(&output).unwrap(), result.document);
        assert_eq!(result.registry.iter().collect::<Vec<_>>(), vec!["x.h", "y.h"]);
    }

    #[test]
    fn test_generate_leaves_no_partial_output() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("amalg.h");
        let store = MemoryStore::new()
            .with_file("x.h", "#define X\n")
            .with_file("a.c", "int a;\n");

        let err = generate(&scenario_manifest(), &store, &output).unwrap_err();
        assert!(format!("{:#}", err).contains("b.c"));
        assert!(!output.exists());
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_check_outcomes() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("amalg.h");
        let manifest = scenario_manifest();
        let store = scenario_store();

        assert_eq!(check(&manifest, &store, &output).unwrap(), CheckOutcome::Missing);

        generate(&manifest, &store, &output).unwrap();
        assert!(check(&manifest, &store, &output).unwrap().is_up_to_date());

        let changed = store.with_file("b.c", "int b(void) { return 3; }\n");
        assert!(matches!(
            check(&manifest, &changed, &output).unwrap(),
            CheckOutcome::Stale { .. }
        ));
    }

    #[test]
    fn test_plan() {
        let plan = plan(&scenario_manifest(), &scenario_store()).unwrap();
        assert_eq!(plan.headers, vec!["x.h", "y.h"]);
        assert_eq!(plan.sources, vec!["a.c", "b.c"]);
        assert_eq!(plan.config_header, "x.h");
        assert_eq!(plan.guard, "defined(A_IMPLEMENTATION) || defined(AB_IMPL)");
    }
}
