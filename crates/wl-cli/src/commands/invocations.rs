//! Invocations command implementation

use anyhow::Result;
use chrono::{Duration, Utc};

use crate::cli::{GlobalArgs, InvocationsArgs};
use crate::context::RuntimeContext;

/// Execute the invocations command
pub async fn execute(args: &InvocationsArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    let since = Utc::now() - Duration::minutes(args.since_mins);
    ctx.verbose(&format!("listing invocations started since {}", since));

    let invocations = ctx.remote.list_workflow_invocations(since).await?;
    for invocation in &invocations {
        println!(
            "{}  {}  {}",
            invocation.start_time.format("%Y-%m-%d %H:%M:%S"),
            invocation.state,
            invocation.name
        );
    }
    println!(
        "\n{} invocations in the last {} minutes",
        invocations.len(),
        args.since_mins
    );

    Ok(())
}
