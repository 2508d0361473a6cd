//! Status command implementation

use anyhow::Result;

use crate::cli::{GlobalArgs, StatusArgs};
use crate::context::RuntimeContext;

/// Execute the status command
pub async fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let invocation = ctx.remote.get_workflow_invocation(&args.name).await?;
    println!("{}: {}", invocation.name, invocation.state);
    println!("compilation: {}", invocation.compilation);

    let actions = ctx
        .remote
        .query_workflow_invocation_actions(&args.name)
        .await?;
    for action in &actions {
        println!("  {} {}", action.state, action.target);
    }
    ctx.verbose(&format!("{} actions reported", actions.len()));

    Ok(())
}
