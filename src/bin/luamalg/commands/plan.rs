//! `luamalg plan` command

use anyhow::Result;

use super::Session;
use crate::cli::PlanArgs;

pub fn execute(session: &Session, args: &PlanArgs) -> Result<()> {
    let plan = luamalg::plan(&session.manifest, &session.store)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!("Headers:");
    for header in &plan.headers {
        if *header == plan.config_header {
            println!("  {} (+ epilogue)", header);
        } else {
            println!("  {}", header);
        }
    }
    if !plan.excluded_headers.is_empty() {
        println!("Excluded:");
        for header in &plan.excluded_headers {
            println!("  {}", header);
        }
    }
    println!("#if {}", plan.guard);
    for source in &plan.sources {
        println!("  {}", source);
    }
    println!("#endif");

    Ok(())
}
