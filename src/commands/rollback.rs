//! Rollback and activate command handlers

use anyhow::Result;

use super::CommandContext;

/// Execute the rollback command
///
/// Restarts only when asked to.
pub fn cmd_rollback(ctx: &CommandContext, restart: bool) -> Result<()> {
    let lifecycle = ctx.lifecycle()?;

    lifecycle.rollback()?;
    if restart {
        lifecycle.restart()?;
    }
    Ok(())
}

/// Execute the activate command
pub fn cmd_activate(ctx: &CommandContext, deployment: &str) -> Result<()> {
    ctx.lifecycle()?.activate(deployment)?;
    Ok(())
}
