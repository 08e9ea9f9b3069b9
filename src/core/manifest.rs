//! The amalgamation manifest.
//!
//! An [`AmalgamManifest`] is the complete, explicit configuration of one
//! amalgamation: which sources are merged and in what order, which headers
//! are known to be foundational, which headers must never be inlined, and the
//! boilerplate injected at the seams of the output.
//!
//! The source order is hand-verified against the C dependency graph of the
//! merged project. It is never permuted.

use std::collections::HashSet;

use serde::Serialize;

use super::errors::ManifestError;

/// Lua release the built-in profile targets.
pub const LUA_VERSION: &str = "5.4.7";

/// Lua sources in compilation-dependency order.
pub const LUA_SOURCES: &[&str] = &[
    // core -- used by all
    "lzio.c",
    "lctype.c",
    "lopcodes.c",
    "lmem.c",
    "lundump.c",
    "ldump.c",
    "lstate.c",
    "lgc.c",
    "llex.c",
    "lcode.c",
    "lparser.c",
    "ldebug.c",
    "lfunc.c",
    "lobject.c",
    "ltm.c",
    "lstring.c",
    "ltable.c",
    "ldo.c",
    "lvm.c",
    "lapi.c",
    // auxiliary library -- used by all
    "lauxlib.c",
    // standard library -- not used by luac
    "lbaselib.c",
    "lcorolib.c",
    "ldblib.c",
    "liolib.c",
    "lmathlib.c",
    "loadlib.c",
    "loslib.c",
    "lstrlib.c",
    "ltablib.c",
    "lutf8lib.c",
    "linit.c",
];

/// Headers every other Lua header depends on.
pub const LUA_SEED_HEADERS: &[&str] = &[
    "lprefix.h",
    "luaconf.h",
    "lua.h",
    "llimits.h",
    "lobject.h",
    "ltm.h",
];

/// Generated per-opcode dispatch table, only valid inside `lvm.c`.
pub const LUA_EXCLUDED_HEADERS: &[&str] = &["ljumptab.h"];

pub const LUA_CONFIG_HEADER: &str = "luaconf.h";

/// Private Lua headers all start with `l`.
pub const LUA_INCLUDE_PREFIX: &str = "l";

pub const LUA_IMPLEMENTATION_MACROS: &[&str] = &["LUA_IMPLEMENTATION", "LUAMALG_IMPLEMENTATION"];

/// Injected right after `luaconf.h` so internal symbols get internal linkage.
pub const LUACONF_EPILOGUE: &str = "/* do not export internal symbols */
#undef LUAI_FUNC
#undef LUAI_DDEC
#undef LUAI_DDEF
#define LUAI_FUNC\tstatic
#define LUAI_DDEC(def)\t/* empty */
#define LUAI_DDEF\tstatic
";

/// Render the license and configuration prologue for a Lua release.
pub fn lua_prologue(version: &str) -> String {
    format!(
        r#"/* Luamalg -- Lua {version} core, libraries and interpreter in a single header
file.

  Do this:
    #define LUA_IMPLEMENTATION
  before you include this file in *one* C or C++ file to create the implementation.

Lua is free software distributed under the terms of the MIT license:
Copyright © 1994-2024 Lua.org, PUC-Rio.

Permission is hereby granted, free of charge, to any person obtaining a copy of
this software and associated documentation files (the "Software"), to deal in
the Software without restriction, including without limitation the rights to
use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
the Software, and to permit persons to whom the Software is furnished to do so,
subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
*/

#include <assert.h>
#include <ctype.h>
#include <errno.h>
#include <float.h>
#include <limits.h>
#include <locale.h>
#include <math.h>
#include <setjmp.h>
#include <signal.h>
#include <stdarg.h>
#include <stddef.h>
#include <stdio.h>
#include <stdlib.h>
#include <string.h>
#include <time.h>

/* setup for luaconf.h */
#define LUA_CORE
#define LUA_LIB
#define ltable_c
#define lvm_c
"#
    )
}

/// Everything needed to produce one amalgamated header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmalgamManifest {
    /// Source files, in the order they are emitted.
    pub sources: Vec<String>,

    /// Foundational headers, emitted first and in this order.
    pub headers: Vec<String>,

    /// Headers never emitted as their own block.
    pub excluded_headers: Vec<String>,

    /// The header the epilogue is injected after.
    pub config_header: String,

    /// File-name prefix identifying the project's private headers. Empty
    /// means every quoted include is local.
    pub include_prefix: String,

    /// Macros any of which enables the implementation section.
    pub implementation_macros: Vec<String>,

    /// Verbatim text at the top of the output.
    pub prologue: String,

    /// Verbatim text injected after the configuration header.
    pub config_epilogue: String,
}

impl AmalgamManifest {
    /// The built-in profile for the Lua distribution.
    pub fn lua() -> Self {
        Self::lua_with_version(LUA_VERSION)
    }

    /// The built-in Lua profile with the prologue rendered for `version`.
    pub fn lua_with_version(version: &str) -> Self {
        AmalgamManifest {
            sources: to_owned(LUA_SOURCES),
            headers: to_owned(LUA_SEED_HEADERS),
            excluded_headers: to_owned(LUA_EXCLUDED_HEADERS),
            config_header: LUA_CONFIG_HEADER.to_string(),
            include_prefix: LUA_INCLUDE_PREFIX.to_string(),
            implementation_macros: to_owned(LUA_IMPLEMENTATION_MACROS),
            prologue: lua_prologue(version),
            config_epilogue: LUACONF_EPILOGUE.to_string(),
        }
    }

    /// Check the manifest can produce a well-formed amalgamation.
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.sources.is_empty() {
            return Err(ManifestError::NoSources);
        }
        if let Some(dup) = first_duplicate(&self.sources) {
            return Err(ManifestError::DuplicateSource(dup.to_string()));
        }
        if let Some(dup) = first_duplicate(&self.headers) {
            return Err(ManifestError::DuplicateHeader(dup.to_string()));
        }
        if let Some(h) = self
            .headers
            .iter()
            .find(|h| self.excluded_headers.contains(h))
        {
            return Err(ManifestError::ExcludedSeedHeader(h.clone()));
        }
        if !self.headers.contains(&self.config_header) {
            return Err(ManifestError::ConfigHeaderNotSeeded(
                self.config_header.clone(),
            ));
        }
        if self.implementation_macros.is_empty() {
            return Err(ManifestError::NoImplementationMacros);
        }
        if let Some(m) = self
            .implementation_macros
            .iter()
            .find(|m| !is_c_identifier(m))
        {
            return Err(ManifestError::InvalidMacro(m.clone()));
        }
        Ok(())
    }

    /// The preprocessor condition guarding the implementation section.
    pub fn guard_condition(&self) -> String {
        self.implementation_macros
            .iter()
            .map(|m| format!("defined({})", m))
            .collect::<Vec<_>>()
            .join(" || ")
    }

    /// Line opening the implementation section.
    pub fn guard_open(&self) -> String {
        format!("#if {}\n", self.guard_condition())
    }

    /// Line closing the implementation section.
    pub fn guard_close(&self) -> String {
        format!("#endif /* {} */\n", self.guard_condition())
    }
}

impl Default for AmalgamManifest {
    fn default() -> Self {
        Self::lua()
    }
}

/// Human-readable marker placed before each relocated file.
pub fn boundary_marker(name: &str) -> String {
    format!("/* === {} === */\n", name)
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn first_duplicate(items: &[String]) -> Option<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .find(|item| !seen.insert(item.as_str()))
        .map(String::as_str)
}

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}
