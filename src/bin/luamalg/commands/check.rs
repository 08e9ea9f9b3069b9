//! `luamalg check` command
//!
//! Regenerates in memory and compares with the header on disk.

use anyhow::{bail, Result};

use super::Session;
use luamalg::ops::CheckOutcome;

pub fn execute(session: &Session) -> Result<()> {
    let output = session.output.display();

    match luamalg::check(&session.manifest, &session.store, &session.output)? {
        CheckOutcome::UpToDate => {
            println!("{} is up to date", output);
            Ok(())
        }
        CheckOutcome::Missing => {
            bail!("{} does not exist\nhelp: Run `luamalg generate`", output)
        }
        CheckOutcome::Stale { expected, actual } => {
            tracing::debug!("expected sha256 {}, found {}", expected, actual);
            bail!("{} is out of date\nhelp: Run `luamalg generate`", output)
        }
    }
}
