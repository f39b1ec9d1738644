//! Command handlers
//!
//! One handler per subcommand. Each builds a `CommandContext`, runs a
//! lifecycle operation and prints the result.

mod context;
mod deploy;
mod list;
mod maintenance;
mod rollback;

use anyhow::Result;

use mfd::presentation::{Cli, Commands};

pub use context::CommandContext;

/// Dispatch a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let ctx = CommandContext::from_cli(&cli)?;

    match cli.command {
        Commands::List => list::cmd_list(&ctx),
        Commands::Deploy { revision } => deploy::cmd_deploy(&ctx, &revision),
        Commands::Resolve { revision } => deploy::cmd_resolve(&ctx, &revision),
        Commands::Rollback { restart } => rollback::cmd_rollback(&ctx, restart),
        Commands::Activate { deployment } => rollback::cmd_activate(&ctx, &deployment),
        Commands::Clean => maintenance::cmd_clean(&ctx),
        Commands::Restart => maintenance::cmd_restart(&ctx),
        Commands::Remove { deployment } => maintenance::cmd_remove(&ctx, &deployment),
    }
}
