//! Local-include detection and rewriting.
//!
//! A local include is a line that, once trimmed, starts with
//! `#include "<prefix>`. Such lines are turned into comments when relocated
//! into the amalgamation, because every file they name is already inlined.

use std::borrow::Cow;

use regex::Regex;

/// Matches and neutralizes local-include directives.
#[derive(Debug, Clone)]
pub struct IncludeRewriter {
    pattern: Regex,
}

impl IncludeRewriter {
    /// Create a rewriter for private headers starting with `prefix`.
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(r#"^#include "({}[^"]*)"#, regex::escape(prefix)))?;
        Ok(IncludeRewriter { pattern })
    }

    /// Whether `line` is a local-include directive.
    pub fn is_local_include(&self, line: &str) -> bool {
        self.pattern.is_match(line.trim())
    }

    /// The quoted file name of a local-include directive.
    ///
    /// An unterminated quote yields everything up to the end of the line.
    pub fn included_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(line.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Rewrite one line for the amalgamation.
    ///
    /// Local includes become `/* <directive> */\n`; every other line is
    /// returned untouched, terminator included.
    ///
    /// The directive is copied verbatim, so a trailing block comment on it
    /// (`#include "lgc.h" /* gc */`) closes the wrapper early.
    pub fn rewrite<'a>(&self, line: &'a str) -> Cow<'a, str> {
        if self.is_local_include(line) {
            Cow::Owned(format!("/* {} */\n", line.trim_end()))
        } else {
            Cow::Borrowed(line)
        }
    }
}
