//! Synthetic manifests and source trees.

use super::MemoryStore;
use crate::core::AmalgamManifest;

pub const SCENARIO_PROLOGUE: &str = "/* scenario prologue */\n#define SCENARIO_CORE\n";
pub const SCENARIO_EPILOGUE: &str = "#undef EXPORT\n#define EXPORT static\n";

/// Two sources, one seed header, one excluded header.
///
/// `a.c` includes `y.h`; `b.c` includes `x.h` and the excluded `z.h`.
pub fn scenario_manifest() -> AmalgamManifest {
    AmalgamManifest {
        sources: vec!["a.c".to_string(), "b.c".to_string()],
        headers: vec!["x.h".to_string()],
        excluded_headers: vec!["z.h".to_string()],
        config_header: "x.h".to_string(),
        include_prefix: String::new(),
        implementation_macros: vec!["A_IMPLEMENTATION".to_string(), "AB_IMPL".to_string()],
        prologue: SCENARIO_PROLOGUE.to_string(),
        config_epilogue: SCENARIO_EPILOGUE.to_string(),
    }
}

pub fn scenario_store() -> MemoryStore {
    MemoryStore::new()
        .with_file("x.h", "#ifndef X_H\n#define X_H\n#define EXPORT extern\n#endif\n")
        .with_file("y.h", "#include \"x.h\"\nEXPORT int y(void);\n")
        .with_file("z.h", "/* generated table */\n")
        .with_file("a.c", "#include \"y.h\"\n\nint y(void) { return 1; }\n")
        .with_file(
            "b.c",
            "#include <stdio.h>\n#include \"x.h\"\n#include \"z.h\"\nint b(void) { return 2; }\n",
        )
}

/// A cut-down Lua-shaped tree for the built-in profile's naming rules.
pub fn lua_like_manifest() -> AmalgamManifest {
    let mut manifest = AmalgamManifest::lua();
    manifest.sources = vec!["lapi.c".to_string(), "lvm.c".to_string()];
    manifest.headers = vec!["lprefix.h".to_string(), "luaconf.h".to_string(), "lua.h".to_string()];
    manifest
}

pub fn lua_like_store() -> MemoryStore {
    MemoryStore::new()
        .with_file("lprefix.h", "#define lprefix_h\n")
        .with_file("luaconf.h", "#define LUAI_FUNC extern\n")
        .with_file("lua.h", "#include \"luaconf.h\"\nLUA_API int lua_gettop(void);\n")
        .with_file("lapi.h", "#include \"llimits.h\"\n")
        .with_file("llimits.h", "#include \"lua.h\"\ntypedef int lu_byte;\n")
        .with_file("lvm.h", "LUAI_FUNC int luaV_execute(void);\n")
        .with_file(
            "lapi.c",
            "#define lapi_c\n#include \"lprefix.h\"\n#include <string.h>\n#include \"lapi.h\"\n",
        )
        .with_file(
            "lvm.c",
            "#include \"lprefix.h\"\n#include \"lvm.h\"\n#include \"ljumptab.h\"\nint luaV_execute(void) { return 0; }\n",
        )
}
