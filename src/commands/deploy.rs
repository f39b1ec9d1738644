//! Deploy and resolve command handlers

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use mfd::domain::ports::NoopEventSink;
use mfd::presentation::deploy_to_json;

use super::CommandContext;

/// Execute the deploy command: resolve, then the full lifecycle
pub fn cmd_deploy(ctx: &CommandContext, revision: &str) -> Result<()> {
    let lifecycle = ctx.lifecycle()?;

    let commit = lifecycle.resolve(revision)?;
    let report = lifecycle.deploy(&commit)?;
    info!(deployment = %report.deployment, cache_hit = report.is_cache_hit(), "deploy finished");

    if ctx.json {
        println!("{}", deploy_to_json(&report));
    }
    Ok(())
}

/// Execute the resolve command; prints only the commit hash in text mode
pub fn cmd_resolve(ctx: &CommandContext, revision: &str) -> Result<()> {
    let lifecycle = ctx.lifecycle()?;

    if ctx.json {
        // The resolved event is the whole output
        lifecycle.resolve(revision)?;
    } else {
        let commit = lifecycle
            .with_events(Arc::new(NoopEventSink))
            .resolve(revision)?;
        println!("{}", commit);
    }
    Ok(())
}
