//! Clean, remove and restart command handlers

use anyhow::Result;
use tracing::{info, warn};

use super::CommandContext;

/// Execute the clean command
pub fn cmd_clean(ctx: &CommandContext) -> Result<()> {
    let report = ctx.lifecycle()?.clean()?;
    info!(removed = report.removed.len(), "clean finished");
    Ok(())
}

/// Execute the remove command
pub fn cmd_remove(ctx: &CommandContext, deployment: &str) -> Result<()> {
    ctx.lifecycle()?.remove(deployment)?;
    Ok(())
}

/// Execute the restart command
pub fn cmd_restart(ctx: &CommandContext) -> Result<()> {
    let lifecycle = ctx.lifecycle()?;
    if lifecycle.settings().unit.is_none() {
        warn!("no systemd unit configured, nothing to restart");
    }
    lifecycle.restart()?;
    Ok(())
}
