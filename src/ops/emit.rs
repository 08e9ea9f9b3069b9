//! Writing the amalgamated header.
//!
//! The output is a fixed sequence of blocks:
//!
//! 1. the prologue,
//! 2. one block per header (the configuration epilogue follows the
//!    configuration header's block),
//! 3. the implementation guard,
//! 4. one block per source file,
//! 5. the guard's closing `#endif`.

use std::borrow::Cow;
use std::io::Write;

use anyhow::{Context, Result};

use super::rewrite::IncludeRewriter;
use crate::core::manifest::boundary_marker;
use crate::core::registry::HeaderRegistry;
use crate::core::store::{SourceStore, TextFile};
use crate::core::AmalgamManifest;

/// Counters collected while emitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitStats {
    pub headers: usize,
    pub sources: usize,
    /// Local includes turned into comments.
    pub rewritten_includes: usize,
    /// Lines written, injected boilerplate included.
    pub lines: usize,
}

/// Appends blocks to a single destination.
pub struct Emitter<'a, W: Write> {
    out: W,
    rewriter: &'a IncludeRewriter,
    stats: EmitStats,
}

impl<'a, W: Write> Emitter<'a, W> {
    pub fn new(out: W, rewriter: &'a IncludeRewriter) -> Self {
        Emitter {
            out,
            rewriter,
            stats: EmitStats::default(),
        }
    }

    /// Write boilerplate text verbatim.
    pub fn write_raw(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("failed to write amalgamation")?;
        self.stats.lines += text.matches('\n').count();
        Ok(())
    }

    /// Write a boundary marker followed by the rewritten file.
    fn write_file(&mut self, file: &TextFile) -> Result<()> {
        self.write_raw(&boundary_marker(file.name()))?;

        let mut terminated = true;
        for line in file.lines() {
            let rewritten = self.rewriter.rewrite(line);
            if matches!(rewritten, Cow::Owned(_)) {
                self.stats.rewritten_includes += 1;
            }
            terminated = rewritten.ends_with('\n');
            self.write_raw(&rewritten)?;
        }
        if !terminated {
            self.write_raw("\n")?;
        }
        Ok(())
    }

    /// Write one header block.
    pub fn write_header(&mut self, file: &TextFile) -> Result<()> {
        self.write_file(file)?;
        self.stats.headers += 1;
        Ok(())
    }

    /// Write one source block.
    pub fn write_source(&mut self, file: &TextFile) -> Result<()> {
        self.write_file(file)?;
        self.stats.sources += 1;
        Ok(())
    }

    /// Flush and hand back the destination.
    pub fn finish(mut self) -> Result<(W, EmitStats)> {
        self.out.flush().context("failed to flush amalgamation")?;
        Ok((self.out, self.stats))
    }
}

/// Emit the full amalgamation for `manifest` into `out`.
pub fn emit<W: Write>(
    out: W,
    manifest: &AmalgamManifest,
    registry: &HeaderRegistry,
    store: &dyn SourceStore,
    rewriter: &IncludeRewriter,
) -> Result<(W, EmitStats)> {
    let mut emitter = Emitter::new(out, rewriter);

    tracing::debug!("Writing prologue");
    emitter.write_raw(&manifest.prologue)?;

    for header in registry.iter() {
        tracing::info!("Header {}", header);
        let file = store
            .read(header)
            .with_context(|| format!("failed to read header `{}`", header))?;
        emitter.write_header(&file)?;

        if header == manifest.config_header {
            emitter.write_raw(&manifest.config_epilogue)?;
            emitter.write_raw("\n")?;
        }
    }

    emitter.write_raw(&manifest.guard_open())?;
    for source in &manifest.sources {
        tracing::info!("Source {}", source);
        let file = store
            .read(source)
            .with_context(|| format!("failed to read source `{}`", source))?;
        emitter.write_source(&file)?;
    }
    emitter.write_raw(&manifest.guard_close())?;

    emitter.finish()
}
