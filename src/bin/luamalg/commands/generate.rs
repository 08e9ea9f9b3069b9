//! `luamalg generate` command

use anyhow::Result;

use super::Session;

pub fn execute(session: &Session) -> Result<()> {
    let result = luamalg::generate(&session.manifest, &session.store, &session.output)?;

    tracing::info!(
        "{} include directives commented out, sha256 {}",
        result.stats.rewritten_includes,
        result.digest()
    );
    Ok(())
}
