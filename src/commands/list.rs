//! List command handler

use anyhow::Result;

use mfd::presentation::{list_to_json, render_list};

use super::CommandContext;

/// Execute the list command
pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let listed = ctx.lifecycle()?.list()?;

    if ctx.json {
        println!("{}", list_to_json(&listed));
    } else {
        print!("{}", render_list(&listed));
    }
    Ok(())
}
